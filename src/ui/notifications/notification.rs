// SPDX-License-Identifier: MPL-2.0
//! Notification data: an i18n key, a severity and a creation time.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// Single glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Resolved at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Maps an application error to the notification shown for it.
    ///
    /// Manifest and storage problems degrade the page rather than break it,
    /// so they are warnings; a video that cannot play is an error.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Load(load) => Self::warning(load.i18n_key()),
            Error::Playback(playback) => Self::error(playback.i18n_key()),
            Error::PopupBlocked(_) => Self::warning("share-popup-blocked"),
            Error::Storage(_) => Self::warning("notification-storage-error"),
            Error::Config(_) => Self::warning("notification-config-load-error"),
            Error::Io(_) => Self::error("notification-config-save-error"),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the notification has outlived its display duration at `now`.
    #[must_use]
    pub fn should_auto_dismiss_at(&self, now: Instant) -> bool {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}
