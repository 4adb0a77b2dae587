// SPDX-License-Identifier: MPL-2.0
//! Passphrase gate in front of the greeting.
//!
//! The configuration stores only the BLAKE3 hash of the passphrase. A
//! successful unlock is remembered in the key-value store under the hash
//! itself, so changing the passphrase locks every previous session out.

use crate::application::port::KeyValueStore;
use crate::error::{Error, Result};

/// Store key of the remembered unlock.
pub const SESSION_KEY: &str = "gate-session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Nothing,
    Hash(blake3::Hash),
    /// Configured but unusable: nobody gets in.
    Sealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGate {
    expected: Expected,
}

impl PasswordGate {
    /// Gate that lets everybody in.
    #[must_use]
    pub fn open() -> Self {
        Self {
            expected: Expected::Nothing,
        }
    }

    /// Gate that rejects every attempt, used when the configured hash is
    /// unreadable.
    #[must_use]
    pub fn sealed() -> Self {
        Self {
            expected: Expected::Sealed,
        }
    }

    /// Builds a gate from the hex hash found in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the hash is not 64 hex characters.
    pub fn from_hex(hash: Option<&str>) -> Result<Self> {
        let expected = match hash.map(str::trim).filter(|hash| !hash.is_empty()) {
            Some(hex) => Expected::Hash(
                blake3::Hash::from_hex(hex)
                    .map_err(|err| Error::Config(format!("invalid passphrase hash: {err}")))?,
            ),
            None => Expected::Nothing,
        };
        Ok(Self { expected })
    }

    /// Hex hash to put in `settings.toml` for a passphrase.
    #[must_use]
    pub fn hash_passphrase(passphrase: &str) -> String {
        blake3::hash(passphrase.trim().as_bytes()).to_hex().to_string()
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.expected != Expected::Nothing
    }

    /// Checks an attempt in constant time.
    #[must_use]
    pub fn verify(&self, attempt: &str) -> bool {
        match self.expected {
            Expected::Hash(expected) => blake3::hash(attempt.trim().as_bytes()) == expected,
            Expected::Nothing => true,
            Expected::Sealed => false,
        }
    }

    /// Verifies an attempt and remembers success in `store`.
    ///
    /// A store failure still lets the visitor in for this run.
    pub fn unlock(&self, attempt: &str, store: &mut impl KeyValueStore) -> bool {
        if !self.verify(attempt) {
            tracing::info!("passphrase rejected");
            return false;
        }
        if let Expected::Hash(expected) = self.expected {
            if let Err(err) = store.set(SESSION_KEY, expected.to_hex().to_string()) {
                tracing::warn!(error = %err, "could not remember unlocked session");
            }
        }
        true
    }

    /// Returns whether the visitor may see the greeting.
    #[must_use]
    pub fn is_authenticated(&self, store: &impl KeyValueStore) -> bool {
        match self.expected {
            Expected::Nothing => true,
            Expected::Sealed => false,
            Expected::Hash(expected) => store
                .get(SESSION_KEY)
                .and_then(|stored| blake3::Hash::from_hex(stored.trim()).ok())
                .is_some_and(|stored| stored == expected),
        }
    }

    /// Forgets the remembered session.
    pub fn lock(&self, store: &mut impl KeyValueStore) {
        if let Err(err) = store.remove(SESSION_KEY) {
            tracing::warn!(error = %err, "could not clear session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MemoryStore;

    fn gate(passphrase: &str) -> PasswordGate {
        let hash = PasswordGate::hash_passphrase(passphrase);
        PasswordGate::from_hex(Some(&hash)).expect("valid hash")
    }

    #[test]
    fn missing_hash_means_no_gate() {
        let gate = PasswordGate::from_hex(None).expect("no hash");
        assert!(!gate.is_required());
        assert!(gate.is_authenticated(&MemoryStore::new()));
        assert_eq!(gate, PasswordGate::open());
    }

    #[test]
    fn invalid_hash_is_config_error() {
        let err = PasswordGate::from_hex(Some("not-hex")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn sealed_gate_rejects_everything() {
        let gate = PasswordGate::sealed();
        let mut store = MemoryStore::new();
        assert!(gate.is_required());
        assert!(!gate.unlock("", &mut store));
        assert!(!gate.is_authenticated(&store));
    }

    #[test]
    fn correct_passphrase_unlocks_and_is_remembered() {
        let gate = gate("balloons");
        let mut store = MemoryStore::new();
        assert!(!gate.is_authenticated(&store));
        assert!(!gate.unlock("confetti", &mut store));
        assert!(gate.unlock("  balloons ", &mut store));
        assert!(gate.is_authenticated(&store));

        gate.lock(&mut store);
        assert!(!gate.is_authenticated(&store));
    }

    #[test]
    fn changed_passphrase_invalidates_session() {
        let mut store = MemoryStore::new();
        assert!(gate("old").unlock("old", &mut store));
        assert!(!gate("new").is_authenticated(&store));
    }

    #[test]
    fn unlock_succeeds_even_when_store_is_full() {
        let gate = gate("cake");
        let mut store = MemoryStore::with_capacity_limit(0);
        assert!(gate.unlock("cake", &mut store));
        assert!(!gate.is_authenticated(&store));
    }
}
