use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Offset, Square};
use crate::moves::move_shared::slide_moves;

pub const ROOK_DIRECTIONS: [Offset; 4] = [-10, -1, 1, 10];

pub fn generate_rook_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_moves(board, from, color, &ROOK_DIRECTIONS, out);
}
