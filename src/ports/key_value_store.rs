//! Key-Value Store Port - where the single local snapshot lives.
//!
//! The browser build uses `localStorage`; here any string store will do.

use thiserror::Error;

/// Errors that can occur during key-value store operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Port for a string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// `None` if nothing is stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_invalid_key() {
        let err = StorageError::InvalidKey("../etc".to_string());
        assert!(err.to_string().contains("Invalid storage key"));
        assert!(err.to_string().contains("../etc"));
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StorageError = io.into();
        assert!(err.to_string().contains("read-only"));
    }
}
