//! Key-value persistence for watchlist, keywords and settings.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub const WATCHLIST_KEY: &str = "meme-screener-watchlist";
pub const TRENDING_KEY: &str = "meme-screener-trending";
pub const SETTINGS_KEY: &str = "meme-screener-settings";

#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("Failed to read '{key}': {reason}")]
    ReadError { key: String, reason: String },

    #[error("Failed to write '{key}': {reason}")]
    WriteError { key: String, reason: String },

    #[error("Failed to delete '{key}': {reason}")]
    DeleteError { key: String, reason: String },

    #[error("Failed to serialize '{key}': {reason}")]
    SerializationError { key: String, reason: String },

    #[error("Stored value for '{key}' is corrupted: {reason}")]
    Corrupted { key: String, reason: String },
}

/// Raw string store keyed by name
pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Deserialize a stored JSON value. Missing or blank values load as `None`.
pub fn load_json<T, K>(store: &K, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    K: KeyValueStore + ?Sized,
{
    let raw = match store.get_raw(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    serde_json::from_str(&raw).map(Some).map_err(|e| StorageError::Corrupted {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

pub fn save_json<T, K>(store: &K, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    K: KeyValueStore + ?Sized,
{
    let content = serde_json::to_string_pretty(value).map_err(|e| StorageError::SerializationError {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set_raw(key, &content)
}
