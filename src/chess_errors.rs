//! Errors used throughout the board engine.
//!
//! `ChessErrors` is the single error type returned by board setup, coordinate
//! conversion, move application and the game controller. Move generation
//! itself never fails: candidates that fall off the board are simply not
//! produced.
//!
//! Usage guidelines:
//! - Parsing and input variants (`InvalidPosition`, `InvalidCoordinate`,
//!   `InvalidArgument`) are recoverable and suitable for showing to users.
//! - `EmptyHistory` is a no-op signal, not a failure. Callers use it to
//!   suppress feedback when there is nothing to undo or redo.
//! - `IllegalMove` means the destination is not in the generated target set
//!   for the piece on the origin square.

use std::error::Error;
use std::fmt;

use crate::game_state::move_history::HistoryDirection;

/// Unified error type for the board engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A piece placement string could not be parsed (strict mode only).
    ///
    /// Payload: a description of what was wrong with the input.
    InvalidPosition(String),

    /// A file-rank coordinate such as `"e4"` could not be parsed.
    ///
    /// Payload: the offending string.
    InvalidCoordinate(String),

    /// A 120-cell board index does not name a playable square.
    IndexOutOfBounds(usize),

    /// Attempted to move or inspect a piece on an empty square.
    ///
    /// Payload: the square's coordinate.
    TryToViewOrEditEmptySquare(String),

    /// The destination is not reachable by the piece on the origin square,
    /// or the origin does not hold a piece of the side to move.
    IllegalMove { from: String, to: String },

    /// Undo or redo was requested with nothing on the corresponding stack.
    EmptyHistory(HistoryDirection),

    /// A command-line flag was unknown or missing its value.
    InvalidArgument(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
            ChessErrors::InvalidCoordinate(coordinate) => {
                write!(f, "invalid coordinate: {coordinate}")
            }
            ChessErrors::IndexOutOfBounds(index) => {
                write!(f, "board index {index} is not a playable square")
            }
            ChessErrors::TryToViewOrEditEmptySquare(coordinate) => {
                write!(f, "no piece on {coordinate}")
            }
            ChessErrors::IllegalMove { from, to } => write!(f, "illegal move {from} -> {to}"),
            ChessErrors::EmptyHistory(HistoryDirection::Undo) => write!(f, "No moves to undo."),
            ChessErrors::EmptyHistory(HistoryDirection::Redo) => write!(f, "No moves to redo."),
            ChessErrors::InvalidArgument(arg) => write!(f, "invalid argument: {arg}"),
        }
    }
}

impl Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::move_history::HistoryDirection;

    #[test]
    fn empty_history_messages_match_the_move_log_wording() {
        assert_eq!(
            ChessErrors::EmptyHistory(HistoryDirection::Undo).to_string(),
            "No moves to undo."
        );
        assert_eq!(
            ChessErrors::EmptyHistory(HistoryDirection::Redo).to_string(),
            "No moves to redo."
        );
    }
}
