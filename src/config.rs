//! Application configuration.
//!
//! Settings load from an optional TOML file in the platform config directory
//! (`custview/config.toml`); command-line flags override file values, and a
//! missing file falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::data::DEFAULT_ROW_COUNT;

/// The debounce delay applied to filter keystrokes, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// The event-loop tick rate, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The config file exists but could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The config file is not valid TOML for these settings.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of synthetic rows generated at startup.
    pub rows: usize,
    /// Debounce delay for filter keystrokes, in milliseconds.
    pub debounce_ms: u64,
    /// Event-loop tick rate, in milliseconds.
    pub tick_rate_ms: u64,
    /// The UI theme to use.
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROW_COUNT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    /// The default config file path: `<config dir>/custview/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("custview").join("config.toml"))
    }

    /// Load settings from the default path, falling back to defaults when
    /// the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but fails to read or parse is an
    /// error, not a silent default.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
