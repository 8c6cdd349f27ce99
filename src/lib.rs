//! Tic-tac-toe with move history and time travel
//!
//! A 3x3 game for two players on one machine. X moves first and marks
//! alternate. Every position reached is kept in a history list, and any
//! earlier position can be selected again; playing a new mark from there
//! discards the positions that followed it.
//!
//! # Architecture
//!
//! - [`board`]: Marks, positions and the 9-cell board
//! - [`rules`]: Win detection over the eight fixed lines, draw classification
//! - [`game`]: History ledger, game state, interaction layer and presenter
//! - [`ui`]: egui/eframe front end, a thin adapter over [`game`]
//! - [`config`]: TOML configuration for the window, UI and logging
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, Mark, Status};
//! use tictactoe::game::status;
//!
//! let mut state = GameState::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     state.apply_move(cell).unwrap();
//! }
//!
//! let win = state.winner().unwrap();
//! assert_eq!(win.mark, Mark::X);
//! assert_eq!(win.line, [0, 4, 8]);
//! assert_eq!(status(&state).to_string(), "Winner: X");
//!
//! // Time travel: go back two moves and play elsewhere
//! state.jump_to(3).unwrap();
//! assert!(state.apply_move(5).unwrap().is_placed());
//! assert_eq!(state.history().len(), 5);
//! assert_eq!(status(&state), Status::NextPlayer(Mark::X));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use game::{Action, GameState, Interaction, ListOrder, MoveOutcome, Rejection, Status};
pub use rules::{evaluate, Outcome, WinResult};
