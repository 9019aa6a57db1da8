//! Local key/value storage
//!
//! Synchronous string store with localStorage semantics:
//! - injected as a `KeyValueStore` trait object so tests can swap it
//! - `MemoryStore` keeps everything in memory
//! - `FileStore` persists to a single JSON file

// ============================================================
// Submodules
// ============================================================

pub mod file;
pub mod keys;

// ============================================================
// Re-exports
// ============================================================

pub use file::FileStore;

// ============================================================
// Imports
// ============================================================

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;

// ============================================================
// Errors
// ============================================================

/// Storage error
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("corrupt value ({key}): {reason}")]
    Corrupt { key: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================
// KeyValueStore
// ============================================================

/// Synchronous key/value store
///
/// Values are plain strings, usually JSON text. A missing key reads as
/// `None` and a write replaces the previous value.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value`, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// ============================================================
// MemoryStore
// ============================================================

/// In-memory store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `entries`
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert!(store.is_empty());

        // missing key is a no-op
        store.remove("k").unwrap();
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryStore::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_error_names_key() {
        let err = StoreError::Corrupt {
            key: "nihongo_srs_data".into(),
            reason: "expected value".into(),
        };
        assert_eq!(
            err.to_string(),
            "corrupt value (nihongo_srs_data): expected value"
        );
    }
}
