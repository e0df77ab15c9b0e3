//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_DUCK` prefix and nested values use double underscores as separators.
//!
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use decision_duck::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Saving to {}", config.storage.directory.display());
//! ```

mod clipboard;
mod error;
mod logging;
mod share;
mod storage;

pub use clipboard::ClipboardConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use share::ShareConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

use crate::application::SessionSettings;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Local snapshot storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Share link settings
    #[serde(default)]
    pub share: ShareConfig,

    /// Clipboard integration
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Log filtering
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `DECISION_DUCK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_DUCK__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `DECISION_DUCK__SHARE__BASE_URL=...` -> `share.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_DUCK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.share.validate()?;
        self.clipboard.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Settings handed to the decision controller
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            storage_key: self.storage.key.clone(),
            share_base_url: self.share.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DECISION_DUCK__STORAGE__BACKEND");
        env::remove_var("DECISION_DUCK__STORAGE__KEY");
        env::remove_var("DECISION_DUCK__SHARE__BASE_URL");
        env::remove_var("DECISION_DUCK__CLIPBOARD__COMMAND");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.share.base_url, "https://decision-duck.app/");
        assert!(config.clipboard.command.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_DUCK__STORAGE__BACKEND", "memory");
        env::set_var("DECISION_DUCK__STORAGE__KEY", "duck-test");
        env::set_var("DECISION_DUCK__SHARE__BASE_URL", "http://localhost:8000/");
        env::set_var("DECISION_DUCK__CLIPBOARD__COMMAND", "wl-copy");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.key, "duck-test");
        assert_eq!(config.share.base_url, "http://localhost:8000/");
        assert_eq!(config.clipboard.command.as_deref(), Some("wl-copy"));
    }

    #[test]
    fn test_session_settings_follow_config() {
        let mut config = AppConfig::default();
        config.storage.key = "k".to_string();
        config.share.base_url = "https://example.org/".to_string();

        let settings = config.session_settings();
        assert_eq!(settings.storage_key, "k");
        assert_eq!(settings.share_base_url, "https://example.org/");
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let mut config = AppConfig::default();
        config.share.base_url = "duck://".to_string();
        assert_eq!(config.validate(), Err(ValidationError::InvalidShareUrl));
    }
}
