use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Offset, Square};
use crate::moves::move_shared::step_moves;

pub const KING_OFFSETS: [Offset; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// One step in any direction. Castling is not generated.
pub fn generate_king_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    step_moves(board, from, color, &KING_OFFSETS, out);
}
