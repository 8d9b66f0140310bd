use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{BOARD_WIDTH, DARK_PAWN_START_ROW, LIGHT_PAWN_START_ROW};
use crate::game_state::chess_types::{Color, Offset, Square};
use crate::moves::move_shared::offset_square;

/// Single push. Light advances towards rank 8, i.e. lower indices.
#[inline]
pub const fn pawn_forward_offset(color: Color) -> Offset {
    match color {
        Color::Light => -10,
        Color::Dark => 10,
    }
}

#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [Offset; 2] {
    match color {
        Color::Light => [-9, -11],
        Color::Dark => [9, 11],
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => LIGHT_PAWN_START_ROW,
        Color::Dark => DARK_PAWN_START_ROW,
    }
}

/// Pushes onto empty squares (two from the start row when both are empty)
/// and diagonal captures onto opponent pieces. No en passant or promotion.
pub fn generate_pawn_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = pawn_forward_offset(color);

    if let Some(one) = offset_square(from, forward) {
        if board.is_board_index(one) && !board.is_occupied(one) {
            out.push(one);

            if from / BOARD_WIDTH == pawn_start_row(color) {
                if let Some(two) = offset_square(one, forward) {
                    if board.is_board_index(two) && !board.is_occupied(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for offset in pawn_capture_offsets(color) {
        let Some(to) = offset_square(from, offset) else {
            continue;
        };
        if board.is_board_index(to) && board.is_occupied_by_opponent(to, color) {
            out.push(to);
        }
    }
}
