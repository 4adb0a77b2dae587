// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! [`AppPaths`] is built once in `main` from the command line and then passed
//! to whoever needs a directory, so there is no process-wide override state.
//!
//! # Path Resolution Order
//!
//! 1. **CLI arguments** (`--data-dir`, `--config-dir`) stored in [`AppPaths`]
//! 2. **Environment variables** (`BIRTHDAY_GALLERY_DATA_DIR`, `BIRTHDAY_GALLERY_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "BirthdayGallery";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "BIRTHDAY_GALLERY_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BIRTHDAY_GALLERY_CONFIG_DIR";

/// File holding user preferences inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// File holding the persisted key-value store inside the data directory.
pub const STATE_FILE: &str = "state.cbor";

/// Resolved directory overrides for one run of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppPaths {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

impl AppPaths {
    /// Creates paths from optional CLI overrides.
    #[must_use]
    pub fn new(data_dir: Option<String>, config_dir: Option<String>) -> Self {
        Self {
            data_dir: data_dir.map(PathBuf::from),
            config_dir: config_dir.map(PathBuf::from),
        }
    }

    /// Returns the application data directory path.
    ///
    /// This directory holds the persisted key-value store (session flags,
    /// prompt dismissal records). Returns `None` only when no override is set
    /// and the platform directory cannot be determined.
    #[must_use]
    pub fn data_dir(&self) -> Option<PathBuf> {
        resolve(self.data_dir.as_ref(), ENV_DATA_DIR, dirs::data_dir)
    }

    /// Returns the application config directory path.
    #[must_use]
    pub fn config_dir(&self) -> Option<PathBuf> {
        resolve(self.config_dir.as_ref(), ENV_CONFIG_DIR, dirs::config_dir)
    }

    /// Full path of `settings.toml`.
    #[must_use]
    pub fn config_file(&self) -> Option<PathBuf> {
        self.config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Full path of the persisted state file.
    #[must_use]
    pub fn state_file(&self) -> Option<PathBuf> {
        self.data_dir().map(|dir| dir.join(STATE_FILE))
    }
}

fn resolve(
    cli_override: Option<&PathBuf>,
    env_var: &str,
    platform_default: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = cli_override {
        return Some(path.clone());
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_default().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
