//! Square conversions between file-rank coordinates and mailbox indices.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and the padded
//! 120-cell board index used by move generation. Both directions are pure
//! and reject anything outside the playable 8x8 area.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{is_playable_index, BOARD_WIDTH, LAST_PLAYABLE_ROW};
use crate::game_state::chess_types::Square;

/// Convert a coordinate such as `"e4"` to its 120-cell index (`65`).
#[inline]
pub fn coordinate_to_index120(coordinate: &str) -> Result<Square, ChessErrors> {
    let bytes = coordinate.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidCoordinate(coordinate.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidCoordinate(coordinate.to_owned()));
    }

    Ok(square_from_file_rank(file - b'a', rank - b'1'))
}

/// Convert a 120-cell index to its coordinate (`65` -> `"e4"`).
#[inline]
pub fn index120_to_coordinate(index: Square) -> Result<String, ChessErrors> {
    if !is_playable_index(index as usize) {
        return Err(ChessErrors::IndexOutOfBounds(index as usize));
    }

    let row = index / BOARD_WIDTH;
    let column = index % BOARD_WIDTH;
    let file_char = char::from(b'a' + (column - 1));
    let rank_char = char::from(b'1' + (LAST_PLAYABLE_ROW - row));

    Ok(format!("{file_char}{rank_char}"))
}

/// Index of the square at zero-based `file` (a = 0) and `rank` (rank 1 = 0).
///
/// Callers must keep both arguments in `0..8`.
#[inline]
pub const fn square_from_file_rank(file: u8, rank: u8) -> Square {
    (LAST_PLAYABLE_ROW - rank) * BOARD_WIDTH + file + 1
}
