//! Command-line interface for the tic-tac-toe window.

use std::path::PathBuf;

use clap::Parser;

/// Tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (overrides the config file; RUST_LOG wins over both)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,
}
