//! Game rules for tic-tac-toe
//!
//! This module implements the rule set:
//! - Win detection over the eight fixed lines
//! - Draw and in-progress classification

pub mod outcome;
pub mod win;

// Re-exports for convenient access
pub use outcome::{is_draw, outcome, Outcome};
pub use win::{evaluate, has_won, WinResult, WINNING_LINES};
