use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Offset, Square};
use crate::moves::move_shared::slide_moves;

/// Rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [Offset; 8] = [-10, -1, 1, 10, -11, -9, 9, 11];

pub fn generate_queen_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_moves(board, from, color, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::Color;
    use crate::moves::bishop_moves::generate_bishop_moves;
    use crate::moves::rook_moves::generate_rook_moves;
    use crate::utils::algebraic::coordinate_to_index120;
    use crate::utils::fen_parser::ParseMode;

    #[test]
    fn queen_is_the_union_of_rook_and_bishop() {
        let board = BoardState::from_placement("8/1p6/8/8/3Q4/8/5P2/8", ParseMode::Strict)
            .expect("placement should parse");
        let d4 = coordinate_to_index120("d4").expect("d4");

        let mut queen = Vec::new();
        generate_queen_moves(&board, d4, Color::Light, &mut queen);

        let mut union = Vec::new();
        generate_rook_moves(&board, d4, Color::Light, &mut union);
        generate_bishop_moves(&board, d4, Color::Light, &mut union);

        queen.sort_unstable();
        union.sort_unstable();
        assert_eq!(queen, union);
    }

    #[test]
    fn queen_on_empty_d4_has_twenty_seven_targets() {
        let d4 = coordinate_to_index120("d4").expect("d4");
        let mut out = Vec::new();
        generate_queen_moves(&BoardState::new_empty(), d4, Color::Dark, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_cannot_move_at_the_start() {
        let board = BoardState::from_placement(STARTING_POSITION_PLACEMENT, ParseMode::Strict)
            .expect("starting placement should parse");
        let d1 = coordinate_to_index120("d1").expect("d1");
        let mut out = Vec::new();
        generate_queen_moves(&board, d1, Color::Light, &mut out);
        assert!(out.is_empty());
    }
}
