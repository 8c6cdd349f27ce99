//! Text and highlighting derived from a game state
//!
//! Nothing here depends on the GUI, so the status line and move list can be
//! checked in plain unit tests.

use std::fmt;

use crate::board::{Mark, Pos, TOTAL_CELLS};
use crate::rules::Outcome;

use super::state::{GameState, ListOrder};

/// Status line shown above the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NextPlayer(Mark),
    Winner(Mark),
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NextPlayer(mark) => write!(f, "Next player: {mark}"),
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::Draw => f.write_str("It's a draw!"),
        }
    }
}

pub fn status(state: &GameState) -> Status {
    match state.outcome() {
        Outcome::InProgress { next } => Status::NextPlayer(next),
        Outcome::Won(win) => Status::Winner(win.mark),
        Outcome::Draw => Status::Draw,
    }
}

/// One selectable row of the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub step: usize,
    pub description: String,
    /// Entry for the selected step (rendered bold)
    pub is_current: bool,
    /// Cell filled by this move, `None` for the game start
    pub placed_at: Option<Pos>,
}

pub fn describe_step(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}

/// Move list in the state's display order
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    let history = state.history();
    let mut entries: Vec<MoveEntry> = (0..history.len())
        .map(|step| MoveEntry {
            step,
            description: describe_step(step),
            is_current: step == state.current_step(),
            placed_at: history.placed_at(step).map(Pos::from_index),
        })
        .collect();

    if state.list_order() == ListOrder::Descending {
        entries.reverse();
    }
    entries
}

/// Cells belonging to the winning line of the current board
pub fn highlighted_cells(state: &GameState) -> [bool; TOTAL_CELLS] {
    let mut cells = [false; TOTAL_CELLS];
    if let Some(win) = state.winner() {
        for idx in win.line {
            cells[idx] = true;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(cells: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &cell in cells {
            state.apply_move(cell).unwrap();
        }
        state
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::NextPlayer(Mark::X).to_string(), "Next player: X");
        assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
        assert_eq!(Status::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_status_follows_state() {
        assert_eq!(status(&GameState::new()), Status::NextPlayer(Mark::X));
        assert_eq!(status(&played(&[4])), Status::NextPlayer(Mark::O));
        assert_eq!(status(&played(&[0, 1, 4, 2, 8])), Status::Winner(Mark::X));
        assert_eq!(
            status(&played(&[0, 1, 2, 4, 3, 5, 7, 6, 8])),
            Status::Draw
        );
    }

    #[test]
    fn test_move_list_ascending() {
        let state = played(&[4, 0]);
        let entries = move_list(&state);

        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(
            descriptions,
            ["Go to game start", "Go to move #1", "Go to move #2"]
        );
        assert_eq!(entries[0].placed_at, None);
        assert_eq!(entries[1].placed_at, Some(Pos::new(1, 1)));
        assert_eq!(entries[2].placed_at, Some(Pos::new(0, 0)));
        assert!(entries[2].is_current);
        assert!(!entries[0].is_current);
    }

    #[test]
    fn test_move_list_descending_marks_current() {
        let mut state = played(&[4, 0, 8]);
        state.toggle_order();
        state.jump_to(1).unwrap();

        let entries = move_list(&state);
        let steps: Vec<usize> = entries.iter().map(|e| e.step).collect();
        assert_eq!(steps, [3, 2, 1, 0]);

        let current: Vec<usize> = entries.iter().filter(|e| e.is_current).map(|e| e.step).collect();
        assert_eq!(current, [1]);
    }

    #[test]
    fn test_highlighted_cells() {
        assert_eq!(highlighted_cells(&played(&[0, 1])), [false; TOTAL_CELLS]);

        let won = played(&[0, 1, 4, 2, 8]);
        let highlighted = highlighted_cells(&won);
        for idx in 0..TOTAL_CELLS {
            assert_eq!(highlighted[idx], [0, 4, 8].contains(&idx), "cell {idx}");
        }
    }
}
