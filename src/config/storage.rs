//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::DEFAULT_STORAGE_KEY;

/// Where the local snapshot is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which store backs the snapshot
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Namespaced key the snapshot is saved under
    #[serde(default = "default_key")]
    pub key: String,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key.trim().is_empty() || self.key.contains(['/', '\\']) || self.key.starts_with('.') {
            return Err(ValidationError::InvalidStorageKey);
        }
        if self.backend == StorageBackend::File && self.directory.as_os_str().is_empty() {
            return Err(ValidationError::EmptyStorageDirectory);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            directory: default_directory(),
            key: default_key(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./.decision-duck")
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.key, "decision-duck-v3-hide-scores");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_config_rejects_bad_keys() {
        for key in ["", "  ", "a/b", "..", "a\\b"] {
            let config = StorageConfig {
                key: key.to_string(),
                ..StorageConfig::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidStorageKey), "{:?}", key);
        }
    }

    #[test]
    fn test_memory_backend_ignores_directory() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            directory: PathBuf::new(),
            ..StorageConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_backend_deserialization() {
        let config: StorageConfig = serde_json::from_str(r#"{"backend":"memory"}"#).unwrap();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.directory, PathBuf::from("./.decision-duck"));
    }
}
