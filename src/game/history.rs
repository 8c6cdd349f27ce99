//! Move history: every board position reached in the current line of play

use crate::board::Board;

/// Ordered sequence of board snapshots
///
/// Entry 0 is always the empty board and each later entry adds exactly one
/// mark to the one before it. The history is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        let mut boards = Vec::with_capacity(10);
        boards.push(Board::new());
        Self { boards }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the empty starting board is never removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    #[inline]
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    #[inline]
    pub fn latest(&self) -> &Board {
        // Never empty: `new` seeds the empty board and truncation keeps step 0.
        &self.boards[self.boards.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Drop every entry after `step`, keeping `step + 1` boards
    pub fn truncate_after(&mut self, step: usize) {
        self.boards.truncate(step + 1);
    }

    /// Append the board reached by the next move
    pub fn push(&mut self, board: Board) {
        debug_assert!(board.placed_since(self.latest()).is_some());
        self.boards.push(board);
    }

    /// Cell index filled by the move that produced `step`
    ///
    /// `None` for step 0 and for steps past the end.
    pub fn placed_at(&self, step: usize) -> Option<usize> {
        let prev = self.boards.get(step.checked_sub(1)?)?;
        self.boards.get(step)?.placed_since(prev)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_starts_with_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert!(history.latest().is_board_empty());
        assert_eq!(history.placed_at(0), None);
    }

    #[test]
    fn test_push_and_placed_at() {
        let mut history = History::new();
        let first = history.latest().with_mark(4, Mark::X);
        history.push(first);
        history.push(first.with_mark(0, Mark::O));

        assert_eq!(history.len(), 3);
        assert_eq!(history.placed_at(1), Some(4));
        assert_eq!(history.placed_at(2), Some(0));
        assert_eq!(history.placed_at(3), None);
    }

    #[test]
    fn test_truncate_after_keeps_prefix() {
        let mut history = History::new();
        let mut board = Board::new();
        for (step, cell) in [0, 1, 2, 3].into_iter().enumerate() {
            board = board.with_mark(cell, Mark::for_step(step));
            history.push(board);
        }
        assert_eq!(history.len(), 5);

        history.truncate_after(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().mark_count(), 1);

        history.truncate_after(0);
        assert_eq!(history.len(), 1);
        assert!(history.latest().is_board_empty());
    }
}
