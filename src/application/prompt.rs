// SPDX-License-Identifier: MPL-2.0
//! Install prompt dismissal records.
//!
//! When the visitor dismisses the "add to home screen" prompt, a record is
//! stored so the prompt stays away for the configured cooldown. Storage
//! problems only ever make the prompt show again; they are logged and
//! otherwise ignored.

use crate::application::port::KeyValueStore;
use crate::error::StorageError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Store key of the dismissal record.
pub const DISMISSAL_KEY: &str = "install-prompt-dismissal";

/// Persisted record of one dismissal.
///
/// Encoded as `{"timestamp": "<RFC 3339>", "durationMs": 604800000, "platform": "linux"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DismissalRecord {
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,
    pub platform: String,
}

impl DismissalRecord {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, duration: Duration, platform: impl Into<String>) -> Self {
        Self {
            timestamp,
            duration_ms: u64::try_from(duration.num_milliseconds()).unwrap_or(0),
            platform: platform.into(),
        }
    }

    /// Moment the prompt may show again.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        i64::try_from(self.duration_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .and_then(|duration| self.timestamp.checked_add_signed(duration))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }

    /// Decodes a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] when the value is not a record.
    pub fn decode(value: &str) -> Result<Self, StorageError> {
        serde_json::from_str(value).map_err(|err| StorageError::Corrupt(err.to_string()))
    }

    /// Encodes the record for storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if serialization fails.
    pub fn encode(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::Corrupt(err.to_string()))
    }
}

/// Decides whether the install prompt should be suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSuppression {
    cooldown: Duration,
}

impl PromptSuppression {
    #[must_use]
    pub fn new(cooldown_days: u32) -> Self {
        Self {
            cooldown: Duration::days(i64::from(cooldown_days)),
        }
    }

    /// Stores a dismissal made at `now`. Returns whether it was saved.
    pub fn record_dismissal(&self, store: &mut impl KeyValueStore, platform: &str, now: DateTime<Utc>) -> bool {
        let record = DismissalRecord::new(now, self.cooldown, platform);
        let saved = record
            .encode()
            .and_then(|value| store.set(DISMISSAL_KEY, value));
        match saved {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "could not store prompt dismissal");
                false
            }
        }
    }

    /// Returns whether a still-active dismissal exists.
    ///
    /// Expired or unreadable records are removed.
    pub fn is_suppressed(&self, store: &mut impl KeyValueStore, now: DateTime<Utc>) -> bool {
        let Some(value) = store.get(DISMISSAL_KEY) else {
            return false;
        };
        match DismissalRecord::decode(&value) {
            Ok(record) if record.is_active(now) => true,
            Ok(_) => {
                self.forget(store);
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable prompt dismissal");
                self.forget(store);
                false
            }
        }
    }

    fn forget(&self, store: &mut impl KeyValueStore) {
        if let Err(err) = store.remove(DISMISSAL_KEY) {
            tracing::warn!(error = %err, "could not clear prompt dismissal");
        }
    }
}

/// Platform name recorded with dismissals.
#[must_use]
pub fn current_platform() -> &'static str {
    std::env::consts::OS
}
