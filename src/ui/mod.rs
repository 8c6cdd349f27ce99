//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It renders the
//! game state and forwards input to [`crate::game::Interaction`]; it holds no
//! game rules of its own.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
