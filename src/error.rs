//! Centralized error types for custview.
//!
//! All error types use `thiserror` for ergonomic error handling; the binary
//! boundary in `main` reports them through `anyhow`.

use thiserror::Error;

use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// IO errors (terminal, file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    ///
    /// Returned after the terminal has been restored, so it prints to a
    /// normal screen without technical jargon.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
            },
            AppError::Io(e) => format!("IO error: {}", e),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_error_display() {
        let err = AppError::terminal("raw mode failed");
        assert_eq!(err.to_string(), "Terminal error: raw mode failed");
    }

    #[test]
    fn test_config_error_user_message() {
        let err = AppError::Config(ConfigError::NoConfigDir);
        assert!(err.user_message().contains("configuration directory"));
    }
}
