//! Padded mailbox board.
//!
//! `BoardState` stores one `Cell` per entry of a 10x12 grid. The ring of
//! `Cell::OffBoard` sentinels two cells deep around the 8x8 area means every
//! offset a piece can make from a playable square lands either on another
//! playable square or on a sentinel, so move generation needs a single
//! sentinel test instead of separate file and rank bound checks.
//!
//! All predicates accept any `Square` value and answer `false` for sentinels
//! and for indices past the end of the grid.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{playable_squares, BOARD_CELLS};
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::utils::algebraic::{coordinate_to_index120, index120_to_coordinate};
use crate::utils::fen_parser::{parse_placement, ParseMode};

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    OffBoard,
    Empty,
    Occupied(Piece),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: [Cell; BOARD_CELLS],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl BoardState {
    /// Board with every playable square empty and the sentinel ring in place.
    pub fn new_empty() -> Self {
        let mut cells = [Cell::OffBoard; BOARD_CELLS];
        for square in playable_squares() {
            cells[square as usize] = Cell::Empty;
        }
        Self { cells }
    }

    pub fn from_placement(placement: &str, mode: ParseMode) -> Result<Self, ChessErrors> {
        let mut board = Self::new_empty();
        board.draw(placement, mode)?;
        Ok(board)
    }

    /// Rewrite every playable square from a placement string.
    ///
    /// The string is parsed before anything is touched, so a rejected
    /// placement leaves the board as it was.
    pub fn draw(&mut self, placement: &str, mode: ParseMode) -> Result<(), ChessErrors> {
        let pieces = parse_placement(placement, mode)?;

        self.clear();
        for (square, piece) in pieces {
            self.cells[square as usize] = Cell::Occupied(piece);
        }

        Ok(())
    }

    /// Empty every playable square. Sentinels are untouched.
    pub fn clear(&mut self) {
        for square in playable_squares() {
            self.cells[square as usize] = Cell::Empty;
        }
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells
            .get(square as usize)
            .copied()
            .unwrap_or(Cell::OffBoard)
    }

    #[inline]
    pub fn is_board_index(&self, square: Square) -> bool {
        !matches!(self.cell(square), Cell::OffBoard)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        match self.cell(square) {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    #[inline]
    pub fn is_occupied_by_ally(&self, square: Square, color: Color) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color == color)
    }

    #[inline]
    pub fn is_occupied_by_opponent(&self, square: Square, color: Color) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color != color)
    }

    /// Relocate the piece on `from` to `to` and return whatever stood on `to`.
    ///
    /// No movement rules are checked here. Both squares must be playable and
    /// `from` must hold a piece.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, ChessErrors> {
        if !self.is_board_index(to) {
            return Err(ChessErrors::IndexOutOfBounds(to as usize));
        }
        let piece = match self.cell(from) {
            Cell::Occupied(piece) => piece,
            Cell::Empty => {
                return Err(ChessErrors::TryToViewOrEditEmptySquare(
                    index120_to_coordinate(from)?,
                ))
            }
            Cell::OffBoard => return Err(ChessErrors::IndexOutOfBounds(from as usize)),
        };

        let captured = self.piece_at(to);
        self.cells[from as usize] = Cell::Empty;
        self.cells[to as usize] = Cell::Occupied(piece);

        Ok(captured)
    }

    /// Coordinate form of [`BoardState::move_piece`], e.g. `("e2", "e4")`.
    pub fn move_by_coordinates(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<Option<Piece>, ChessErrors> {
        let from = coordinate_to_index120(from)?;
        let to = coordinate_to_index120(to)?;
        self.move_piece(from, to)
    }

    /// Put `piece` on `square`, replacing any occupant.
    pub fn place(&mut self, piece: Piece, square: Square) -> Result<(), ChessErrors> {
        if !self.is_board_index(square) {
            return Err(ChessErrors::IndexOutOfBounds(square as usize));
        }
        self.cells[square as usize] = Cell::Occupied(piece);
        Ok(())
    }

    /// Empty `square` and return its previous occupant.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let previous = self.piece_at(square);
        if previous.is_some() {
            self.cells[square as usize] = Cell::Empty;
        }
        previous
    }

    /// Occupied squares in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        playable_squares().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}
