//! Session configuration for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for an interactive session.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// Text printed before reading each move.
    prompt: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Print the move list once the game ends.
    show_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter the coordinates: ".to_string(),
            log_filter: "warn".to_string(),
            show_history: false,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(show_history = config.show_history, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
