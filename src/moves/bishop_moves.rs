use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Offset, Square};
use crate::moves::move_shared::slide_moves;

pub const BISHOP_DIRECTIONS: [Offset; 4] = [-11, -9, 9, 11];

pub fn generate_bishop_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_moves(board, from, color, &BISHOP_DIRECTIONS, out);
}
