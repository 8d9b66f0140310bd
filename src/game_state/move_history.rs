//! Done/undone move stacks.
//!
//! `MoveHistory` only tracks which moves sit on which stack. Reversing a move
//! on the board is done by `move_generation::move_apply`, which peeks the top
//! of a stack, updates the board, and then transfers the move.

use crate::game_state::chess_move::ChessMove;

/// Which stack an undo/redo request targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Undo,
    Redo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    done: Vec<ChessMove>,
    undone: Vec<ChessMove>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly played move. Any redo timeline is discarded.
    pub fn commit(&mut self, mv: ChessMove) {
        self.done.push(mv);
        self.undone.clear();
    }

    #[inline]
    pub fn last_done(&self) -> Option<&ChessMove> {
        self.done.last()
    }

    #[inline]
    pub fn last_undone(&self) -> Option<&ChessMove> {
        self.undone.last()
    }

    /// Move the newest played move onto the redo stack.
    pub fn mark_undone(&mut self) -> Option<ChessMove> {
        let mv = self.done.pop()?;
        self.undone.push(mv);
        Some(mv)
    }

    /// Move the newest undone move back onto the played stack.
    pub fn mark_redone(&mut self) -> Option<ChessMove> {
        let mv = self.undone.pop()?;
        self.done.push(mv);
        Some(mv)
    }

    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }

    pub fn moves(&self) -> &[ChessMove] {
        &self.done
    }

    pub fn undone_moves(&self) -> &[ChessMove] {
        &self.undone
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn print_move_history(&self) -> String {
        if self.done.is_empty() {
            return "No moves have been made yet.".to_owned();
        }

        let mut out = String::from("Move History:\n");
        for (index, mv) in self.done.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} ({})\n",
                index + 1,
                mv.to_chess_notation(),
                mv
            ));
        }
        out
    }
}
