use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Offset, Square};
use crate::moves::move_shared::step_moves;

/// Knight jumps on the 10-wide mailbox. The two-cell border absorbs the
/// two-file component, so no jump can wrap to the opposite edge.
pub const KNIGHT_OFFSETS: [Offset; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];

pub fn generate_knight_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    step_moves(board, from, color, &KNIGHT_OFFSETS, out);
}
