//! Canonical board-geometry and rule constants.
//!
//! The board is a 10-wide, 12-tall mailbox. Rows 0, 1, 10 and 11 and
//! columns 0 and 9 are sentinel cells; the playable 8x8 area sits in rows
//! 2..=9 and columns 1..=8. Row 2 is rank 8 and row 9 is rank 1, so moving
//! "up the board" for the light side subtracts `BOARD_WIDTH`.

use crate::game_state::chess_types::Square;

/// Standard starting arrangement as a rank-by-rank placement string.
pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Separator between rank groups in a placement string.
pub const RANK_DELIMITER: char = '/';

/// Total number of cells in the padded board.
pub const BOARD_CELLS: usize = 120;

/// Stride between two vertically adjacent cells.
pub const BOARD_WIDTH: u8 = 10;

pub const FIRST_PLAYABLE_SQUARE: Square = 21;
pub const LAST_PLAYABLE_SQUARE: Square = 98;

pub const FIRST_PLAYABLE_ROW: u8 = 2;
pub const LAST_PLAYABLE_ROW: u8 = 9;
pub const FIRST_PLAYABLE_COLUMN: u8 = 1;
pub const LAST_PLAYABLE_COLUMN: u8 = 8;

/// Grid row holding light pawns before they have moved (rank 2).
pub const LIGHT_PAWN_START_ROW: u8 = 8;
/// Grid row holding dark pawns before they have moved (rank 7).
pub const DARK_PAWN_START_ROW: u8 = 3;

/// True iff `index` lies inside the playable 8x8 area of the padded grid.
///
/// This is pure geometry; `BoardState::is_board_index` answers the same
/// question by looking at the sentinel cell itself.
#[inline]
pub const fn is_playable_index(index: usize) -> bool {
    if index >= BOARD_CELLS {
        return false;
    }
    let row = (index / BOARD_WIDTH as usize) as u8;
    let column = (index % BOARD_WIDTH as usize) as u8;
    row >= FIRST_PLAYABLE_ROW
        && row <= LAST_PLAYABLE_ROW
        && column >= FIRST_PLAYABLE_COLUMN
        && column <= LAST_PLAYABLE_COLUMN
}

/// Every playable square in ascending index order (a8, b8, ..., h1).
pub fn playable_squares() -> impl Iterator<Item = Square> {
    (FIRST_PLAYABLE_SQUARE..=LAST_PLAYABLE_SQUARE).filter(|&sq| is_playable_index(sq as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_exactly_sixty_four_playable_squares() {
        assert_eq!(playable_squares().count(), 64);
        assert_eq!(playable_squares().next(), Some(FIRST_PLAYABLE_SQUARE));
        assert_eq!(playable_squares().last(), Some(LAST_PLAYABLE_SQUARE));
    }

    #[test]
    fn border_columns_are_not_playable() {
        assert!(!is_playable_index(20));
        assert!(!is_playable_index(29));
        assert!(!is_playable_index(30));
        assert!(!is_playable_index(99));
        assert!(!is_playable_index(119));
        assert!(!is_playable_index(500));
    }
}
