//! Application configuration loaded from an optional TOML file

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::game::ListOrder;

/// Top-level configuration
///
/// Every section and field is optional in the file; missing values fall back
/// to [`Default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub game: GameConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 520.0,
            title: "Tic-Tac-Toe".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Initial order of the move list
    pub list_order: ListOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show a faded mark under the pointer on empty cells
    pub hover_preview: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { hover_preview: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when RUST_LOG is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config from file");

        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;

        info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.game.list_order, ListOrder::Ascending);
        assert!(config.ui.hover_preview);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [game]
            list_order = "descending"

            [window]
            title = "Noughts and Crosses"
            "#,
        )
        .unwrap();

        assert_eq!(config.game.list_order, ListOrder::Descending);
        assert_eq!(config.window.title, "Noughts and Crosses");
        assert_eq!(config.window.width, WindowConfig::default().width);
        assert!(config.ui.hover_preview);
    }

    #[test]
    fn test_unknown_order_rejected() {
        let err = AppConfig::from_toml("[game]\nlist_order = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nhover_preview = false\n\n[log]\nfilter = \"debug\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert!(!config.ui.hover_preview);
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = AppConfig::from_file(&missing).unwrap_err();
        match err {
            Error::ConfigRead { path, .. } => assert_eq!(path, missing),
            other => panic!("expected ConfigRead, got {other:?}"),
        }
    }
}
