//! JSON File Store
//!
//! Persists each key as `<data_dir>/<key>.json` so screener state survives
//! restarts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::storage::{KeyValueStore, StorageError};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File backing `key`. Keys are restricted to `[A-Za-z0-9_-]`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::WriteError {
                key: key.to_string(),
                reason: "invalid key".to_string(),
            });
        }
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| StorageError::ReadError {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(key, path = %path.display(), bytes = content.len(), "Loaded stored state");
        Ok(Some(content))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        // Ensure parent directory exists
        fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::WriteError {
            key: key.to_string(),
            reason: format!("create {}: {}", self.data_dir.display(), e),
        })?;

        // Write to a sibling temp file first so a crash never leaves a torn file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StorageError::WriteError {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::WriteError {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(key, path = %path.display(), "Saved state");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StorageError::DeleteError {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
            tracing::info!("State file deleted: {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::Settings;
    use crate::ports::storage::{load_json, save_json, SETTINGS_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let mut settings = Settings::default();
        settings.set_auto_refresh_interval(120);
        save_json(&store, SETTINGS_KEY, &settings).unwrap();

        assert!(dir.path().join("meme-screener-settings.json").exists());
        let loaded: Option<Settings> = load_json(&store, SETTINGS_KEY).unwrap();
        assert_eq!(loaded, Some(settings));
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let loaded: Option<Settings> = load_json(&store, SETTINGS_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_empty_file_loads_as_none() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("meme-screener-settings.json"), "   ").unwrap();
        let store = JsonFileStore::new(dir.path());

        let loaded: Option<Settings> = load_json(&store, SETTINGS_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("meme-screener-settings.json"), "{not json").unwrap();
        let store = JsonFileStore::new(dir.path());

        let result: Result<Option<Settings>, _> = load_json(&store, SETTINGS_KEY);
        assert!(matches!(result, Err(StorageError::Corrupted { .. })));
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonFileStore::new(&nested);

        store.set_raw("k", "{}").unwrap();
        assert!(nested.join("k.json").exists());
        assert!(!nested.join("k.json.tmp").exists());
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.set_raw("k", "{}").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get_raw("k").unwrap(), None);

        // removing a missing key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = JsonFileStore::new("data");
        assert!(store.path_for("../etc/passwd").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("meme-screener-watchlist").is_ok());
    }
}
