//! Core value types shared by the board, move generation and history.

use std::fmt;

pub use crate::game_state::board_state::{BoardState, Cell};
pub use crate::game_state::chess_move::ChessMove;
pub use crate::game_state::game_state::GameState;

/// Index into the padded 120-cell board. Playable squares are `21..=98`.
pub type Square = u8;

/// Signed distance between two board indices.
pub type Offset = i8;

/// Side to move. Light plays the uppercase pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "white",
            Color::Dark => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase type letter.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Case-insensitive type letter lookup.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece is nothing more than its type and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a placement letter: uppercase is light, lowercase is dark.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece { color, kind })
    }

    pub const fn to_fen_char(self) -> char {
        let lower = self.kind.to_char();
        match self.color {
            Color::Light => lower.to_ascii_uppercase(),
            Color::Dark => lower,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_letters_follow_case_convention() {
        let white_knight = Piece::from_fen_char('N').expect("N is a piece");
        assert_eq!(white_knight, Piece::new(Color::Light, PieceKind::Knight));
        assert_eq!(white_knight.to_fen_char(), 'N');

        let black_queen = Piece::from_fen_char('q').expect("q is a piece");
        assert_eq!(black_queen.color, Color::Dark);
        assert_eq!(black_queen.to_string(), "q");
    }

    #[test]
    fn unknown_letters_are_not_pieces() {
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
        assert_eq!(PieceKind::from_char('z'), None);
    }

    #[test]
    fn color_flips() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Dark.opposite().name(), "white");
    }
}
