//! Error types for Pantry.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A view mode string that names no known mode.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown view mode: '{0}'")]
pub struct ModeParseError(pub String);
