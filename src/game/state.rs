//! Game state: the history ledger, the selected step and the list order

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Mark, TOTAL_CELLS};
use crate::error::{Error, Result};
use crate::rules::{self, Outcome, WinResult};

use super::history::History;

/// Display order of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    #[default]
    Ascending,
    Descending,
}

impl ListOrder {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ListOrder::Ascending => ListOrder::Descending,
            ListOrder::Descending => ListOrder::Ascending,
        }
    }
}

/// Why a move left the state unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The board at the current step already has a completed line
    GameOver,
    /// The target cell already holds a mark
    Occupied,
}

/// Result of [`GameState::apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { cell: usize, mark: Mark },
    Rejected(Rejection),
}

impl MoveOutcome {
    #[inline]
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Main game state
///
/// The mark to move is not stored: it follows from the parity of
/// `current_step`, so it cannot drift out of sync with the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    current_step: usize,
    list_order: ListOrder,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_order(ListOrder::default())
    }

    /// New game with the move list shown in `order`
    pub fn with_order(order: ListOrder) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            list_order: order,
        }
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[inline]
    pub fn list_order(&self) -> ListOrder {
        self.list_order
    }

    /// Board at the selected step
    #[inline]
    pub fn current_board(&self) -> &Board {
        // current_step < history.len() is upheld by apply_move and jump_to
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Mark whose turn it is at the selected step
    #[inline]
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Completed line on the current board, if any
    pub fn winner(&self) -> Option<WinResult> {
        rules::evaluate(self.current_board())
    }

    pub fn outcome(&self) -> Outcome {
        rules::outcome(self.current_board(), self.next_mark())
    }

    /// Place the next mark on `cell` of the current board
    ///
    /// Later history entries are discarded before the new board is appended.
    /// Moves after a win or onto an occupied cell leave the state unchanged.
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome> {
        if cell >= TOTAL_CELLS {
            return Err(Error::CellOutOfRange { index: cell });
        }

        let board = *self.current_board();

        if let Some(win) = rules::evaluate(&board) {
            debug!(cell, winner = %win.mark, "Move rejected: game over");
            return Ok(MoveOutcome::Rejected(Rejection::GameOver));
        }

        if !board.is_empty(cell) {
            debug!(cell, "Move rejected: cell occupied");
            return Ok(MoveOutcome::Rejected(Rejection::Occupied));
        }

        let mark = self.next_mark();
        self.history.truncate_after(self.current_step);
        self.history.push(board.with_mark(cell, mark));
        self.current_step += 1;

        Ok(MoveOutcome::Placed { cell, mark })
    }

    /// Select a previous (or later) step of the history
    ///
    /// The history itself is untouched until the next move.
    pub fn jump_to(&mut self, step: usize) -> Result<()> {
        let len = self.history.len();
        if step >= len {
            return Err(Error::StepOutOfRange { step, len });
        }
        self.current_step = step;
        Ok(())
    }

    /// Flip the move list between ascending and descending
    pub fn toggle_order(&mut self) {
        self.list_order = self.list_order.toggled();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
