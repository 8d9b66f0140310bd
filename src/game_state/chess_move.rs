use std::fmt;

use crate::game_state::chess_types::{Piece, Square};
use crate::utils::algebraic::index120_to_coordinate;

/// A committed move. Built once when the move is applied and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
}

impl ChessMove {
    pub const fn new(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> Self {
        Self {
            piece,
            from,
            to,
            captured,
        }
    }

    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn origin(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn destination(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn from_coordinate(&self) -> String {
        square_name(self.from)
    }

    pub fn to_coordinate(&self) -> String {
        square_name(self.to)
    }

    /// Short notation: piece letter, `x` on capture, destination (`Nxf3`).
    pub fn to_chess_notation(&self) -> String {
        let mut out = String::with_capacity(4);
        out.push(self.piece.to_fen_char());
        if self.is_capture() {
            out.push('x');
        }
        out.push_str(&self.to_coordinate());
        out
    }
}

/// Verbose form: `N from g1 to f3[, capturing p]`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} to {}",
            self.piece,
            self.from_coordinate(),
            self.to_coordinate()
        )?;
        if let Some(captured) = self.captured {
            write!(f, ", capturing {captured}")?;
        }
        Ok(())
    }
}

/// Coordinate name of a playable square, or the raw index for a sentinel.
fn square_name(square: Square) -> String {
    index120_to_coordinate(square).unwrap_or_else(|_| square.to_string())
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::coordinate_to_index120;

    #[test]
    fn quiet_move_notation() {
        let mv = ChessMove::new(
            Piece::new(Color::Light, PieceKind::Pawn),
            coordinate_to_index120("e2").expect("e2"),
            coordinate_to_index120("e4").expect("e4"),
            None,
        );

        assert_eq!(mv.to_chess_notation(), "Pe4");
        assert_eq!(mv.to_string(), "P from e2 to e4");
    }

    #[test]
    fn capture_notation() {
        let mv = ChessMove::new(
            Piece::new(Color::Dark, PieceKind::Knight),
            coordinate_to_index120("c6").expect("c6"),
            coordinate_to_index120("d4").expect("d4"),
            Some(Piece::new(Color::Light, PieceKind::Queen)),
        );

        assert!(mv.is_capture());
        assert_eq!(mv.to_chess_notation(), "nxd4");
        assert_eq!(mv.to_string(), "n from c6 to d4, capturing Q");
    }
}
