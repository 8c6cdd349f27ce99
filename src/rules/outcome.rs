//! Classification of a board into in-progress, won or drawn

use crate::board::{Board, Mark};

use super::win::{evaluate, WinResult};

/// Result of looking at a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress { next: Mark },
    Won(WinResult),
    /// All cells filled with no completed line
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress { .. })
    }
}

/// Classify a board given the mark whose turn it is
///
/// A line completed by the ninth mark is a win, not a draw.
pub fn outcome(board: &Board, next: Mark) -> Outcome {
    if let Some(win) = evaluate(board) {
        return Outcome::Won(win);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress { next }
}

/// Check for a drawn board
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(outcome(&board, Mark::X), Outcome::InProgress { next: Mark::X });
        assert!(!outcome(&board, Mark::X).is_over());
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        // X O X
        // O X O
        // O X X  <- ninth mark completes the 0-4-8 diagonal
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ];
        let board = marks
            .iter()
            .enumerate()
            .fold(Board::new(), |b, (i, &m)| b.with_mark(i, m));

        assert!(board.is_full());
        assert!(!is_draw(&board));
        match outcome(&board, Mark::O) {
            Outcome::Won(win) => {
                assert_eq!(win.mark, Mark::X);
                assert_eq!(win.line, [0, 4, 8]);
            }
            other => panic!("expected win, got {other:?}"),
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::O,
            Mark::O, Mark::X, Mark::O,
        ];
        let board = marks
            .iter()
            .enumerate()
            .fold(Board::new(), |b, (i, &m)| b.with_mark(i, m));

        assert!(is_draw(&board));
        assert_eq!(outcome(&board, Mark::O), Outcome::Draw);
        assert!(Outcome::Draw.is_over());
    }
}
