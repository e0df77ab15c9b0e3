//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Storage key must be non-empty and contain no path separators")]
    InvalidStorageKey,

    #[error("Storage directory must not be empty")]
    EmptyStorageDirectory,

    #[error("Share base URL must start with http:// or https://")]
    InvalidShareUrl,

    #[error("Clipboard command is set but blank")]
    BlankClipboardCommand,

    #[error("Clipboard timeout must be greater than zero")]
    ZeroClipboardTimeout,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
