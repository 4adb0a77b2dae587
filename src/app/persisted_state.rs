// SPDX-License-Identifier: MPL-2.0
//! Persisted key-value state using CBOR format.
//!
//! Holds what the gallery remembers between runs (the gate session and
//! install prompt dismissals). It is not user-configurable, so it lives in
//! `state.cbor` under the data directory rather than in `settings.toml`.
//!
//! Every write goes straight to disk. A store without a path (no data
//! directory on this platform) behaves like session-only memory.

use crate::application::port::{KeyValueStore, MemoryStore};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// On-disk layout of the state file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    entries: HashMap<String, String>,
}

/// [`KeyValueStore`] backed by a CBOR file.
#[derive(Debug, Default)]
pub struct PersistedStore {
    path: Option<PathBuf>,
    memory: MemoryStore,
}

impl PersistedStore {
    /// Loads the store from `path`.
    ///
    /// Returns the store and an optional i18n warning key. A missing file is
    /// an empty store; an unreadable one is replaced on the next write.
    pub fn load(path: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };

        let (entries, warning) = match read_entries(&path) {
            Ok(entries) => (entries, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "discarding unreadable state file");
                (
                    HashMap::new(),
                    Some("notification-storage-error".to_string()),
                )
            }
        };

        (
            Self {
                path: Some(path),
                memory: MemoryStore::from_entries(entries),
            },
            warning,
        )
    }

    /// A store that never touches disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn flush(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::Unavailable(err.to_string()))?;
        }

        let file = fs::File::create(path).map_err(|err| StorageError::Unavailable(err.to_string()))?;
        let state = StateFile {
            entries: self.memory.entries().clone(),
        };
        ciborium::into_writer(&state, BufWriter::new(file))
            .map_err(|err| StorageError::Unavailable(err.to_string()))
    }
}

fn read_entries(path: &Path) -> Result<HashMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let file = fs::File::open(path).map_err(|err| StorageError::Unavailable(err.to_string()))?;
    let state: StateFile = ciborium::from_reader(BufReader::new(file))
        .map_err(|err| StorageError::Corrupt(err.to_string()))?;
    Ok(state.entries)
}

impl KeyValueStore for PersistedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.memory.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.memory.set(key, value)?;
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.memory.remove(key)?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty_without_warning() {
        let dir = tempdir().expect("tempdir");
        let (store, warning) = PersistedStore::load(Some(dir.path().join("state.cbor")));
        assert!(warning.is_none());
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn values_survive_a_reload() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("state.cbor");

        let (mut store, _) = PersistedStore::load(Some(path.clone()));
        store.set("gate-session", "abc".into()).expect("set");
        store.set("other", "x".into()).expect("set");
        store.remove("other").expect("remove");

        let (reloaded, warning) = PersistedStore::load(Some(path));
        assert!(warning.is_none());
        assert_eq!(reloaded.get("gate-session").as_deref(), Some("abc"));
        assert!(reloaded.get("other").is_none());
    }

    #[test]
    fn corrupt_file_warns_and_starts_empty() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("state.cbor");
        fs::write(&path, b"\xff\xff not cbor").expect("write");

        let (store, warning) = PersistedStore::load(Some(path));
        assert_eq!(warning.as_deref(), Some("notification-storage-error"));
        assert!(store.get("gate-session").is_none());
    }

    #[test]
    fn in_memory_store_never_writes() {
        let mut store = PersistedStore::in_memory();
        store.set("k", "v".into()).expect("set");
        assert!(store.path().is_none());
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
