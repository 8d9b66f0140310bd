//! Applying, undoing and redoing moves on a `GameState`.
//!
//! These are raw state transitions: `apply_move` relocates whatever stands on
//! the origin square without checking movement rules. The controller is
//! responsible for only passing generated destinations.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{GameState, Square};
use crate::game_state::move_history::HistoryDirection;
use crate::utils::algebraic::index120_to_coordinate;

/// Play `from -> to`, record it, and hand the turn over.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> Result<ChessMove, ChessErrors> {
    let piece = game_state
        .board
        .piece_at(from)
        .ok_or_else(|| match index120_to_coordinate(from) {
            Ok(coordinate) => ChessErrors::TryToViewOrEditEmptySquare(coordinate),
            Err(err) => err,
        })?;

    let captured = game_state.board.move_piece(from, to)?;
    let mv = ChessMove::new(piece, from, to, captured);

    game_state.history.commit(mv);
    game_state.switch_turn();

    Ok(mv)
}

/// Take back the most recent move, restoring any captured piece.
pub fn undo_move(game_state: &mut GameState) -> Result<ChessMove, ChessErrors> {
    let mv = *game_state
        .history
        .last_done()
        .ok_or(ChessErrors::EmptyHistory(HistoryDirection::Undo))?;

    game_state.board.move_piece(mv.destination(), mv.origin())?;
    if let Some(captured) = mv.captured() {
        game_state.board.place(captured, mv.destination())?;
    }

    game_state.history.mark_undone();
    game_state.switch_turn();

    Ok(mv)
}

/// Replay the most recently undone move.
pub fn redo_move(game_state: &mut GameState) -> Result<ChessMove, ChessErrors> {
    let mv = *game_state
        .history
        .last_undone()
        .ok_or(ChessErrors::EmptyHistory(HistoryDirection::Redo))?;

    game_state.board.move_piece(mv.origin(), mv.destination())?;

    game_state.history.mark_redone();
    game_state.switch_turn();

    Ok(mv)
}
