//! Win condition checking for tic-tac-toe
//!
//! A board is won when all three cells of one of the eight fixed lines hold
//! the same mark. Lines are scanned in priority order (rows top to bottom,
//! then columns left to right, then the two diagonals), so a board with
//! several completed lines always reports the same one.

use tracing::{instrument, trace};

use crate::board::{Board, Mark};

/// Winning line indices on the 3x3 board, in priority order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A completed line and the mark that completed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinResult {
    pub mark: Mark,
    pub line: [usize; 3],
}

impl WinResult {
    /// Check if a cell belongs to the winning line
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Find the first completed line on the board
///
/// Returns `None` when no line is complete. Any board is valid input.
#[instrument(level = "trace", skip_all)]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    let cells = board.cells();

    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a] {
            if cells[b] == Some(mark) && cells[c] == Some(mark) {
                trace!(%mark, ?line, "line complete");
                return Some(WinResult { mark, line });
            }
        }
    }

    None
}

/// Check if a mark has three in a row anywhere on the board
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == Some(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(idx, mark)| board.with_mark(idx, mark))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_from(&line.map(|idx| (idx, mark)));
                assert_eq!(
                    evaluate(&board),
                    Some(WinResult { mark, line }),
                    "line {line:?} for {mark}"
                );
                assert!(has_won(&board, mark));
                assert!(!has_won(&board, mark.opponent()));
            }
        }
    }

    #[test]
    fn test_mixed_line_not_win() {
        let board = board_from(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_two_in_row_not_win() {
        let board = board_from(&[(0, Mark::X), (4, Mark::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_row_beats_column() {
        // X X X
        // X . .
        // X . .
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(evaluate(&board).map(|w| w.line), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_beats_diagonal() {
        // X . .
        // X X .
        // X . X
        let board = board_from(&[
            (0, Mark::X),
            (3, Mark::X),
            (4, Mark::X),
            (6, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(evaluate(&board).map(|w| w.line), Some([0, 3, 6]));
    }

    #[test]
    fn test_first_diagonal_beats_second() {
        let board = board_from(&[
            (0, Mark::O),
            (2, Mark::O),
            (4, Mark::O),
            (6, Mark::O),
            (8, Mark::O),
        ]);
        assert_eq!(evaluate(&board).map(|w| w.line), Some([0, 4, 8]));
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // O X O
        // O X O
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_win_result_contains() {
        let win = WinResult {
            mark: Mark::X,
            line: [2, 4, 6],
        };
        assert!(win.contains(4));
        assert!(!win.contains(0));
    }
}
