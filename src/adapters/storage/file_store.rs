//! File-based Key-Value Store Adapter
//!
//! Stores each key as `<key>.json` under a base directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{KeyValueStore, StorageError};

/// File-based key-value store
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    fn file_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key.starts_with('.')
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.file_path(key)?;
        fs::create_dir_all(&self.base_path)?;

        // Write then rename so a crash never leaves half a blob behind.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEY: &str = "decision-duck-v3-hide-scores";

    #[test]
    fn test_file_store_get_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        assert!(store.get(KEY).unwrap().is_none());
    }

    #[test]
    fn test_file_store_set_and_get() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set(KEY, r#"{"topic":"x"}"#).unwrap();

        assert_eq!(store.get(KEY).unwrap().as_deref(), Some(r#"{"topic":"x"}"#));
        assert!(dir.path().join(format!("{}.json", KEY)).exists());
    }

    #[test]
    fn test_file_store_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("a").join("b"));

        store.set(KEY, "{}").unwrap();

        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set(KEY, "first").unwrap();
        store.set(KEY, "second").unwrap();

        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("second"));
        assert!(!dir.path().join(format!("{}.json.tmp", KEY)).exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        for key in ["", "../escape", "a/b", "a\\b", ".hidden"] {
            assert!(
                matches!(store.set(key, "x"), Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
