//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the CLI, tests and diagnostics.
//! Empty squares listed in `highlights` are drawn as `*`; occupied ones keep
//! their piece glyph.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_from_file_rank;

/// Render the board, rank 8 at the top.
pub fn render_board(board: &BoardState, highlights: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let sq = square_from_file_rank(file, rank);
            match board.piece_at(sq) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None if highlights.contains(&sq) => out.push('*'),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a side-to-move line.
pub fn render_game_state(game_state: &GameState, highlights: &[Square]) -> String {
    format!(
        "{}\n{} to move",
        render_board(&game_state.board, highlights),
        game_state.side_to_move
    )
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::coordinate_to_index120;

    #[test]
    fn starting_position_renders_back_ranks() {
        let game = GameState::new_game();
        let text = render_game_state(&game, &[]);

        println!("\n{text}");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[10], "white to move");
    }

    #[test]
    fn highlighted_empty_squares_are_marked() {
        let game = GameState::new_game();
        let e3 = coordinate_to_index120("e3").expect("e3");
        let e4 = coordinate_to_index120("e4").expect("e4");
        let text = render_board(&game.board, &[e3, e4]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "4 · · · · * · · · 4");
        assert_eq!(lines[6], "3 · · · · * · · · 3");
    }
}
