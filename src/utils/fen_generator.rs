//! Board-to-placement-string generator.
//!
//! Produces the piece-placement field that `fen_parser` reads, so a board can
//! be saved and redrawn without loss.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::RANK_DELIMITER;
use crate::utils::algebraic::square_from_file_rank;

pub fn generate_placement(board: &BoardState) -> String {
    let mut out = String::with_capacity(64);

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..8u8 {
            match board.piece_at(square_from_file_rank(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push(RANK_DELIMITER);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_placement;
    use crate::game_state::board_state::BoardState;
    use crate::utils::fen_parser::ParseMode;

    #[test]
    fn placements_round_trip() {
        for placement in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "8/8/8/8/8/8/8/8",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        ] {
            let board = BoardState::from_placement(placement, ParseMode::Strict)
                .expect("placement should parse");
            assert_eq!(generate_placement(&board), placement);
        }
    }

    #[test]
    fn permissive_input_is_normalised() {
        let board = BoardState::from_placement("4xK/8/8", ParseMode::Permissive)
            .expect("permissive parsing never fails");
        assert_eq!(generate_placement(&board), "4K3/8/8/8/8/8/8/8");
    }
}
