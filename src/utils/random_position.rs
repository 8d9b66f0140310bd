//! Shuffled-back-rank starting positions.
//!
//! The dark back rank is a uniform shuffle of `rnbqkbnr`; the light back rank
//! mirrors it file for file. Pawns stay on their usual ranks. No constraint
//! is placed on bishop colours or king placement.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const BACK_RANK: [char; 8] = ['r', 'n', 'b', 'q', 'k', 'b', 'n', 'r'];

pub fn random_start_placement<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut back_rank = BACK_RANK;
    back_rank.shuffle(rng);

    let dark: String = back_rank.iter().collect();
    let light = dark.to_ascii_uppercase();

    format!("{dark}/pppppppp/8/8/8/8/PPPPPPPP/{light}")
}

/// Reproducible variant for tests and `--seed`.
pub fn seeded_start_placement(seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    random_start_placement(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::move_generator::get_all_moves;
    use crate::utils::fen_parser::ParseMode;

    #[test]
    fn random_placements_parse_strictly_and_mirror() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let placement = random_start_placement(&mut rng);
            BoardState::from_placement(&placement, ParseMode::Strict)
                .expect("generated placement should parse");

            let ranks: Vec<&str> = placement.split('/').collect();
            assert_eq!(ranks[0].to_ascii_uppercase(), ranks[7]);

            let mut sorted: Vec<char> = ranks[0].chars().collect();
            sorted.sort_unstable();
            assert_eq!(sorted, ['b', 'b', 'k', 'n', 'n', 'q', 'r', 'r']);
        }
    }

    #[test]
    fn seeded_placements_are_reproducible() {
        assert_eq!(seeded_start_placement(42), seeded_start_placement(42));
    }

    #[test]
    fn every_shuffle_leaves_pawn_moves_and_some_piece_moves() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let placement = random_start_placement(&mut rng);
            let board = BoardState::from_placement(&placement, ParseMode::Strict)
                .expect("generated placement should parse");

            // 16 pawn moves plus one or two per knight.
            let light = get_all_moves(&board, Color::Light).expect("coordinates convert");
            assert!((18..=20).contains(&light.len()), "{placement}: {}", light.len());
        }
    }
}
