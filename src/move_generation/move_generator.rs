//! Pseudo-legal move generation.
//!
//! A generator turns (board, piece, origin) into the list of destination
//! squares the piece's movement pattern allows. Whether the mover's king is
//! left attacked is not considered.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::playable_squares;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;
use crate::utils::algebraic::index120_to_coordinate;

pub trait MoveGenerator {
    /// Destinations for `piece` standing on `from`. Read-only on `board`.
    fn generate_piece_moves(&self, board: &BoardState, piece: Piece, from: Square) -> Vec<Square>;

    /// Destinations for whatever stands on `from`; empty if nothing does.
    fn generate_moves_from_square(&self, board: &BoardState, from: Square) -> Vec<Square> {
        match board.piece_at(from) {
            Some(piece) => self.generate_piece_moves(board, piece, from),
            None => Vec::new(),
        }
    }

    /// Destinations for a piece given by its placement letter. Unrecognised
    /// letters produce no moves.
    fn generate_moves_for_code(&self, board: &BoardState, code: char, from: Square) -> Vec<Square> {
        match Piece::from_fen_char(code) {
            Some(piece) => self.generate_piece_moves(board, piece, from),
            None => Vec::new(),
        }
    }

    /// Every `(origin, destination)` pair for the pieces of `color`, in
    /// ascending origin order.
    fn generate_all_moves(&self, board: &BoardState, color: Color) -> Vec<(Square, Square)> {
        let mut all = Vec::with_capacity(64);
        for from in playable_squares() {
            if !board.is_occupied_by_ally(from, color) {
                continue;
            }
            all.extend(
                self.generate_moves_from_square(board, from)
                    .into_iter()
                    .map(|to| (from, to)),
            );
        }
        all
    }
}

/// Movement-shape rules for the six standard piece kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_piece_moves(&self, board: &BoardState, piece: Piece, from: Square) -> Vec<Square> {
        let mut out = Vec::with_capacity(28);
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, &mut out),
            PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
            PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
            PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
            PieceKind::King => generate_king_moves(board, from, piece.color, &mut out),
        }
        out
    }
}

/// All moves of `color` as coordinate pairs, e.g. `("g1", "f3")`.
pub fn get_all_moves(board: &BoardState, color: Color) -> Result<Vec<(String, String)>, ChessErrors> {
    PseudoLegalMoveGenerator
        .generate_all_moves(board, color)
        .into_iter()
        .map(|(from, to)| Ok((index120_to_coordinate(from)?, index120_to_coordinate(to)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{is_playable_index, STARTING_POSITION_PLACEMENT};
    use crate::utils::algebraic::coordinate_to_index120;
    use crate::utils::fen_parser::ParseMode;

    fn start_board() -> BoardState {
        BoardState::from_placement(STARTING_POSITION_PLACEMENT, ParseMode::Strict)
            .expect("starting placement should parse")
    }

    #[test]
    fn every_destination_is_playable_for_every_piece_and_origin() {
        let generator = PseudoLegalMoveGenerator;
        let boards = [
            BoardState::new_empty(),
            start_board(),
            BoardState::from_placement(
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
                ParseMode::Strict,
            )
            .expect("placement should parse"),
        ];

        for board in &boards {
            for color in [Color::Light, Color::Dark] {
                for kind in PieceKind::ALL {
                    for from in playable_squares() {
                        let piece = Piece::new(color, kind);
                        for to in generator.generate_piece_moves(board, piece, from) {
                            assert!(
                                is_playable_index(to as usize),
                                "{piece} from {from} produced sentinel {to}"
                            );
                            assert!(!board.is_occupied_by_ally(to, color));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_piece_code_yields_no_moves() {
        let board = start_board();
        let e2 = coordinate_to_index120("e2").expect("e2");
        assert!(PseudoLegalMoveGenerator
            .generate_moves_for_code(&board, 'x', e2)
            .is_empty());
        assert_eq!(
            PseudoLegalMoveGenerator
                .generate_moves_for_code(&board, 'P', e2)
                .len(),
            2
        );
    }

    #[test]
    fn empty_square_yields_no_moves() {
        let board = start_board();
        let e4 = coordinate_to_index120("e4").expect("e4");
        assert!(PseudoLegalMoveGenerator
            .generate_moves_from_square(&board, e4)
            .is_empty());
    }

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let board = start_board();
        let light = get_all_moves(&board, Color::Light).expect("coordinates convert");
        let dark = get_all_moves(&board, Color::Dark).expect("coordinates convert");

        assert_eq!(light.len(), 20);
        assert_eq!(dark.len(), 20);
        assert!(light.contains(&("g1".to_owned(), "f3".to_owned())));
        assert!(dark.contains(&("e7".to_owned(), "e5".to_owned())));
    }
}
