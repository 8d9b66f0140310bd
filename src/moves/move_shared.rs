//! Offset walking shared by every piece family.
//!
//! Candidates are produced with checked arithmetic and then tested against
//! the board's sentinel cells; nothing here assumes an offset stays on the
//! board.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Offset, Square};

/// `square + offset`, or `None` if the sum leaves the `u8` range.
#[inline]
pub fn offset_square(square: Square, offset: Offset) -> Option<Square> {
    square.checked_add_signed(offset)
}

/// Single-step targets: playable and not holding a piece of `color`.
pub fn step_moves(
    board: &BoardState,
    from: Square,
    color: Color,
    offsets: &[Offset],
    out: &mut Vec<Square>,
) {
    for &offset in offsets {
        let Some(to) = offset_square(from, offset) else {
            continue;
        };
        if board.is_board_index(to) && !board.is_occupied_by_ally(to, color) {
            out.push(to);
        }
    }
}

/// Ray targets: walk each offset until a sentinel or own piece, including
/// the first opponent piece met.
pub fn slide_moves(
    board: &BoardState,
    from: Square,
    color: Color,
    offsets: &[Offset],
    out: &mut Vec<Square>,
) {
    for &offset in offsets {
        let mut current = offset_square(from, offset);

        while let Some(to) = current {
            if !board.is_board_index(to) || board.is_occupied_by_ally(to, color) {
                break;
            }
            out.push(to);
            if board.is_occupied_by_opponent(to, color) {
                break;
            }
            current = offset_square(to, offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::offset_square;

    #[test]
    fn offsets_below_zero_are_rejected() {
        assert_eq!(offset_square(5, -21), None);
        assert_eq!(offset_square(21, -21), Some(0));
        assert_eq!(offset_square(98, 21), Some(119));
    }
}
