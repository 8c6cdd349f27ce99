//! Board structure holding the nine cells

use super::{Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board, cells stored row-major (index 0-8)
///
/// Boards are small value types: placing a mark produces a new board, which
/// is what lets the history keep every intermediate position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Get cell at index, `None` past the last cell
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Get the mark at position (None if empty)
    #[inline]
    pub fn get_pos(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if cell is empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Copy of this board with `mark` placed at `index`
    ///
    /// Callers check bounds and emptiness first; the game state does.
    #[inline]
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        debug_assert!(index < TOTAL_CELLS);
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(mark);
        self
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when every cell holds a mark
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Index of the single cell that differs from `previous`
    ///
    /// Returns `None` if the boards are equal or differ in more than one cell.
    pub fn placed_since(&self, previous: &Board) -> Option<usize> {
        let mut changed = self
            .cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(|(idx, _)| idx);

        let first = changed.next()?;
        match changed.next() {
            None => Some(first),
            Some(_) => None,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}
