//! Error types for the tic-tac-toe crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the crate
///
/// Moves rejected by the rules (occupied cell, game already won) are not
/// errors; see [`crate::game::MoveOutcome`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell index {index} is outside the 3x3 board")]
    CellOutOfRange { index: usize },

    #[error("history step {step} does not exist (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("window error: {0}")]
    Gui(#[from] eframe::Error),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
