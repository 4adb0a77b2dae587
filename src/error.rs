// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Load(LoadError),
    Playback(PlaybackError),
    /// A share window could not be opened for the given platform.
    PopupBlocked(String),
    Storage(StorageError),
}

/// Failures while fetching or decoding the gallery manifest.
///
/// The gallery renders empty when any of these reach the page bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request could not be sent or the connection dropped.
    Network(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// A local manifest file could not be read.
    Io(String),

    /// The document is not valid manifest JSON.
    Parse(String),
}

impl LoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "notification-load-error-network",
            LoadError::Status(_) => "notification-load-error-status",
            LoadError::Io(_) => "notification-load-error-io",
            LoadError::Parse(_) => "notification-load-error-parse",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Status(code) => write!(f, "HTTP status: {}", code),
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Invalid manifest: {}", msg),
        }
    }
}

/// A video tile that cannot be played.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// The video source could not be resolved to a path or URL.
    Unresolvable(String),

    /// The system player refused to start.
    LaunchFailed(String),
}

impl PlaybackError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::Unresolvable(_) => "notification-playback-error-source",
            PlaybackError::LaunchFailed(_) => "notification-playback-error-launch",
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Unresolvable(src) => write!(f, "Cannot resolve video source: {}", src),
            PlaybackError::LaunchFailed(msg) => write!(f, "Cannot start playback: {}", msg),
        }
    }
}

/// Key-value store failures (quota, unavailable backend, corrupt file).
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The store refused the write because it is full.
    QuotaExceeded,

    /// The backing storage cannot be used at all.
    Unavailable(String),

    /// A stored value could not be decoded.
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QuotaExceeded => write!(f, "Storage quota exceeded"),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Corrupt stored value: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Load(e) => write!(f, "Load Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
            Error::PopupBlocked(platform) => write!(f, "Popup blocked: {}", platform),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
