//! Pseudo-legal perft.
//!
//! Walks the move tree to a fixed depth with apply/undo and counts leaves.
//! Because king safety is ignored the numbers only agree with standard perft
//! tables while no side can be in check, which holds for the first three plies
//! from the starting position.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_apply::{apply_move, undo_move};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

/// Count leaf nodes `depth` plies below `game_state`. The input is left
/// untouched; the walk runs on a scratch copy.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, ChessErrors> {
    let mut scratch = game_state.clone();
    perft_recurse(generator, &mut scratch, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = generator.generate_all_moves(&game_state.board, game_state.side_to_move);
    let mut total = PerftCounts::default();

    for (from, to) in moves {
        let mv = apply_move(game_state, from, to)?;
        if depth == 1 {
            total.nodes += 1;
            if mv.is_capture() {
                total.captures += 1;
            }
        } else {
            total.merge(perft_recurse(generator, game_state, depth - 1)?);
        }
        undo_move(game_state)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn starting_position_matches_known_counts() {
        let game = GameState::new_game();
        let generator = PseudoLegalMoveGenerator;

        assert_eq!(perft(&generator, &game, 1).expect("perft runs").nodes, 20);
        assert_eq!(perft(&generator, &game, 2).expect("perft runs").nodes, 400);

        let depth_three = perft(&generator, &game, 3).expect("perft runs");
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
    }

    #[test]
    fn perft_leaves_the_input_untouched() {
        let game = GameState::new_game();
        perft(&PseudoLegalMoveGenerator, &game, 2).expect("perft runs");
        assert_eq!(game, GameState::new_game());
    }
}
