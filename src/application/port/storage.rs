// SPDX-License-Identifier: MPL-2.0
//! Key-value storage port definition.
//!
//! The gate's session flag and the install prompt dismissal records are the
//! only things the gallery remembers. Both go through [`KeyValueStore`] so
//! they can live in memory (tests, private sessions) or in the persisted
//! state file.

use crate::error::StorageError;
use std::collections::HashMap;

/// Port for a small string-to-string store.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] when the store is full, or
    /// [`StorageError::Unavailable`] when the backend cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store, optionally bounded to a number of entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects new keys once `capacity` entries exist.
    #[must_use]
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries, used when flushing to a persisted backend.
    #[must_use]
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub(crate) fn from_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries,
            capacity: None,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity {
            if !self.entries.contains_key(key) && self.entries.len() >= capacity {
                return Err(StorageError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() {
        let mut store = MemoryStore::new();
        store.set("k", "v".into()).expect("set");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("nothing").is_ok());
        assert!(store.is_empty());
    }

    #[test]
    fn capacity_limit_rejects_new_keys_only() {
        let mut store = MemoryStore::with_capacity_limit(1);
        store.set("a", "1".into()).expect("first key fits");
        assert_eq!(store.set("b", "2".into()), Err(StorageError::QuotaExceeded));
        // Overwriting an existing key does not grow the store.
        assert!(store.set("a", "3".into()).is_ok());
        assert_eq!(store.get("a").as_deref(), Some("3"));
    }
}
