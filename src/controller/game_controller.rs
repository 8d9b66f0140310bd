//! Turn order and square-selection state machine.
//!
//! The controller sits between a UI collaborator and the board engine. The
//! UI reports activated squares (or explicit moves) by coordinate; the
//! controller answers with what to highlight, what moved and which sound cue
//! fits. It never renders, plays audio, or waits on the UI.
//!
//! Selection states:
//! - idle + own piece            -> selected, targets computed
//! - selected + same square      -> idle
//! - selected + other own piece  -> re-selected
//! - selected + target square    -> move committed, idle
//! - anything else               -> ignored

use crate::chess_errors::ChessErrors;
use crate::controller::game_config::GameConfig;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_apply::{apply_move, redo_move, undo_move};
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};
use crate::utils::algebraic::{coordinate_to_index120, index120_to_coordinate};
use crate::utils::game_log::log_line;

/// Which sound a move should trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCue {
    Move,
    Capture,
}

/// What the UI needs after a commit, undo or redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub chess_move: ChessMove,
    pub from: String,
    pub to: String,
    pub captured: Option<Piece>,
    pub cue: MoveCue,
}

impl MoveReport {
    fn new(chess_move: ChessMove) -> Self {
        Self {
            chess_move,
            from: chess_move.from_coordinate(),
            to: chess_move.to_coordinate(),
            captured: chess_move.captured(),
            cue: if chess_move.is_capture() {
                MoveCue::Capture
            } else {
                MoveCue::Move
            },
        }
    }
}

/// Result of a square activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A piece was selected. `previous` is the square that lost its
    /// selection when re-selecting.
    Selected {
        square: String,
        targets: Vec<String>,
        previous: Option<String>,
    },
    Deselected {
        square: String,
    },
    Committed(MoveReport),
    Ignored,
}

pub struct GameController<G: MoveGenerator = PseudoLegalMoveGenerator> {
    game_state: GameState,
    generator: G,
    config: GameConfig,
    selected: Option<Square>,
    highlighted: Vec<Square>,
}

impl GameController<PseudoLegalMoveGenerator> {
    pub fn new(config: GameConfig) -> Result<Self, ChessErrors> {
        Self::with_generator(config, PseudoLegalMoveGenerator)
    }
}

impl<G: MoveGenerator> GameController<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self, ChessErrors> {
        let game_state = GameState::from_placement(&config.start_position, config.parse_mode)?;
        let controller = Self {
            game_state,
            generator,
            config,
            selected: None,
            highlighted: Vec::new(),
        };
        controller.log(|| format!("new game: {}", controller.config.start_position));
        Ok(controller)
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    pub fn highlighted_squares(&self) -> &[Square] {
        &self.highlighted
    }

    /// Start over from the configured position with empty history.
    pub fn new_game(&mut self) -> Result<(), ChessErrors> {
        self.game_state
            .start(&self.config.start_position, self.config.parse_mode)?;
        self.reset_square_selection();
        self.log(|| format!("new game: {}", self.config.start_position));
        Ok(())
    }

    /// Handle a click on `coordinate`.
    pub fn square_activated(&mut self, coordinate: &str) -> Result<SelectionOutcome, ChessErrors> {
        let square = coordinate_to_index120(coordinate)?;

        let Some(selected) = self.selected else {
            if self.is_pieces_turn(square) {
                return self.select(square, None);
            }
            return Ok(SelectionOutcome::Ignored);
        };

        if square == selected {
            self.reset_square_selection();
            return Ok(SelectionOutcome::Deselected {
                square: coordinate.to_owned(),
            });
        }

        if self.is_pieces_turn(square) {
            let previous = index120_to_coordinate(selected)?;
            return self.select(square, Some(previous));
        }

        if self.highlighted.contains(&square) {
            let report = self.commit(selected, square)?;
            return Ok(SelectionOutcome::Committed(report));
        }

        Ok(SelectionOutcome::Ignored)
    }

    /// Play `from -> to` directly. The origin must hold a piece of the side to
    /// move and `to` must be one of its generated destinations.
    pub fn commit_move(&mut self, from: &str, to: &str) -> Result<MoveReport, ChessErrors> {
        let from_sq = coordinate_to_index120(from)?;
        let to_sq = coordinate_to_index120(to)?;

        let reachable = self.is_pieces_turn(from_sq)
            && self
                .generator
                .generate_moves_from_square(&self.game_state.board, from_sq)
                .contains(&to_sq);
        if !reachable {
            return Err(ChessErrors::IllegalMove {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }

        self.commit(from_sq, to_sq)
    }

    pub fn undo(&mut self) -> Result<MoveReport, ChessErrors> {
        self.reset_square_selection();
        match undo_move(&mut self.game_state) {
            Ok(mv) => {
                self.log(|| format!("undo {}", mv.to_chess_notation()));
                Ok(MoveReport::new(mv))
            }
            Err(err) => {
                self.log(|| err.to_string());
                Err(err)
            }
        }
    }

    pub fn redo(&mut self) -> Result<MoveReport, ChessErrors> {
        self.reset_square_selection();
        match redo_move(&mut self.game_state) {
            Ok(mv) => {
                self.log(|| format!("redo {}", mv.to_chess_notation()));
                Ok(MoveReport::new(mv))
            }
            Err(err) => {
                self.log(|| err.to_string());
                Err(err)
            }
        }
    }

    pub fn print_move_history(&self) -> String {
        self.game_state.history.print_move_history()
    }

    fn select(
        &mut self,
        square: Square,
        previous: Option<String>,
    ) -> Result<SelectionOutcome, ChessErrors> {
        self.reset_square_selection();

        let targets = self
            .generator
            .generate_moves_from_square(&self.game_state.board, square);
        let target_names = targets
            .iter()
            .map(|&sq| index120_to_coordinate(sq))
            .collect::<Result<Vec<_>, _>>()?;
        let square_name = index120_to_coordinate(square)?;

        self.selected = Some(square);
        self.highlighted = targets;

        self.log(|| format!("selected {square_name}: {}", target_names.join(" ")));

        Ok(SelectionOutcome::Selected {
            square: square_name,
            targets: target_names,
            previous,
        })
    }

    fn commit(&mut self, from: Square, to: Square) -> Result<MoveReport, ChessErrors> {
        let mv = apply_move(&mut self.game_state, from, to)?;
        self.reset_square_selection();

        self.log(|| format!("played {mv}"));
        self.log(|| self.print_move_history());

        Ok(MoveReport::new(mv))
    }

    fn reset_square_selection(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }

    #[inline]
    fn is_pieces_turn(&self, square: Square) -> bool {
        self.game_state
            .board
            .is_occupied_by_ally(square, self.game_state.side_to_move)
    }

    fn log<F: FnOnce() -> String>(&self, message: F) {
        if self.config.verbose {
            log_line(&message());
        }
    }
}
