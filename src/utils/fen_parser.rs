//! Placement-string parser.
//!
//! Reads the piece-placement field of a FEN string (`rnbqkbnr/pppppppp/...`)
//! into a list of occupied squares. Side to move, castling and clocks are not
//! part of this format; the board only cares about where pieces stand.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::RANK_DELIMITER;
use crate::game_state::chess_types::{Piece, Square};
use crate::utils::algebraic::square_from_file_rank;

/// How malformed placement strings are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Reject anything that is not exactly 8 ranks of 8 files.
    #[default]
    Strict,
    /// Skip unknown characters, drop files past the eighth and leave missing
    /// ranks empty.
    Permissive,
}

/// Parse a placement string into `(square, piece)` pairs, rank 8 first.
pub fn parse_placement(
    placement: &str,
    mode: ParseMode,
) -> Result<Vec<(Square, Piece)>, ChessErrors> {
    match mode {
        ParseMode::Strict => parse_strict(placement),
        ParseMode::Permissive => Ok(parse_permissive(placement)),
    }
}

fn parse_strict(placement: &str) -> Result<Vec<(Square, Piece)>, ChessErrors> {
    let ranks: Vec<&str> = placement.split(RANK_DELIMITER).collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidPosition(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut pieces = Vec::with_capacity(32);

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPosition(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessErrors::InvalidPosition(format!(
                        "rank {} has too many files",
                        rank + 1
                    )));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidPosition(format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(ChessErrors::InvalidPosition(format!(
                    "rank {} has too many files",
                    rank + 1
                )));
            }

            pieces.push((square_from_file_rank(file, rank), piece));
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidPosition(format!(
                "rank {} does not sum to 8 files",
                rank + 1
            )));
        }
    }

    Ok(pieces)
}

fn parse_permissive(placement: &str) -> Vec<(Square, Piece)> {
    let mut pieces = Vec::with_capacity(32);

    for (rank_idx, rank_str) in placement.split(RANK_DELIMITER).take(8).enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file = 0u32;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                file = file.saturating_add(empty_count);
                continue;
            }

            let Some(piece) = Piece::from_fen_char(ch) else {
                continue;
            };

            if file < 8 {
                pieces.push((square_from_file_rank(file as u8, rank), piece));
            }
            file = file.saturating_add(1);
        }
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::utils::algebraic::coordinate_to_index120;

    fn square(coordinate: &str) -> Square {
        coordinate_to_index120(coordinate).expect("test coordinate should parse")
    }

    #[test]
    fn starting_placement_has_thirty_two_pieces() {
        let pieces = parse_placement(STARTING_POSITION_PLACEMENT, ParseMode::Strict)
            .expect("starting placement should parse");

        assert_eq!(pieces.len(), 32);
        assert!(pieces.contains(&(square("e1"), Piece::new(Color::Light, PieceKind::King))));
        assert!(pieces.contains(&(square("d8"), Piece::new(Color::Dark, PieceKind::Queen))));
        assert!(pieces.contains(&(square("a2"), Piece::new(Color::Light, PieceKind::Pawn))));
    }

    #[test]
    fn strict_mode_rejects_malformed_placements() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/08/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/4p4/8/8/8/PPPPPPPP/RNBQKBNR",
        ];

        for placement in bad {
            assert!(
                matches!(
                    parse_placement(placement, ParseMode::Strict),
                    Err(ChessErrors::InvalidPosition(_))
                ),
                "expected rejection of {placement:?}"
            );
        }
    }

    #[test]
    fn permissive_mode_skips_unknown_characters_and_overflow() {
        let pieces = parse_placement("4xK/8/8/8/8/8/8/RRRRRRRRR", ParseMode::Permissive)
            .expect("permissive parsing never fails");

        assert!(pieces.contains(&(square("e8"), Piece::new(Color::Light, PieceKind::King))));
        assert_eq!(
            pieces
                .iter()
                .filter(|(_, piece)| piece.kind == PieceKind::Rook)
                .count(),
            8
        );
    }

    #[test]
    fn permissive_mode_leaves_missing_ranks_empty() {
        let pieces =
            parse_placement("k7", ParseMode::Permissive).expect("permissive parsing never fails");
        assert_eq!(pieces, vec![(square("a8"), Piece::new(Color::Dark, PieceKind::King))]);
    }
}
