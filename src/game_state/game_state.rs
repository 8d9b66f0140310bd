//! Owned game model: board, side to move and move history.
//!
//! Nothing here is global. The controller owns one `GameState` and passes it
//! by reference into move generation and move application.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
use crate::game_state::chess_types::Color;
use crate::game_state::move_history::MoveHistory;
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::ParseMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: BoardState,
    pub side_to_move: Color,
    pub history: MoveHistory,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: BoardState::new_empty(),
            side_to_move: Color::Light,
            history: MoveHistory::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::from_placement(STARTING_POSITION_PLACEMENT, ParseMode::Strict)
            .expect("starting placement should always parse")
    }

    pub fn from_placement(placement: &str, mode: ParseMode) -> Result<Self, ChessErrors> {
        let mut game_state = Self::new_empty();
        game_state.start(placement, mode)?;
        Ok(game_state)
    }

    /// Reset to a fresh game: redraw the board, light to move, no history.
    pub fn start(&mut self, placement: &str, mode: ParseMode) -> Result<(), ChessErrors> {
        self.board.draw(placement, mode)?;
        self.side_to_move = Color::Light;
        self.history.clear();
        Ok(())
    }

    #[inline]
    pub fn switch_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    #[inline]
    pub fn get_placement(&self) -> String {
        generate_placement(&self.board)
    }
}
