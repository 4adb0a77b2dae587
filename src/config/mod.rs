// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Manifest location, page URL and thumbnail reveal counts
//! - `[zoom]` - Click/double-tap zoom scale
//! - `[share]` - Share text
//! - `[access]` - Passphrase hash for the greeting gate
//! - `[prompt]` - Install prompt dismissal cooldown
//!
//! # Path Resolution
//!
//! The config file location is resolved through [`AppPaths`]:
//! 1. Explicit `--config-dir` passed on the command line
//! 2. `BIRTHDAY_GALLERY_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use birthday_gallery::app::paths::AppPaths;
//! use birthday_gallery::config;
//!
//! let paths = AppPaths::default();
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load(&paths);
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config, &paths).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths::AppPaths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery source and thumbnail grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Manifest path or http(s) URL.
    #[serde(default = "default_manifest", skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Public URL of the greeting page, used to build share links.
    #[serde(default = "default_page_url", skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,

    /// Thumbnails shown before "see more".
    #[serde(
        default = "default_initial_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_visible: Option<usize>,

    /// Thumbnails revealed per "see more".
    #[serde(
        default = "default_reveal_batch",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_batch: Option<usize>,

    /// Keep the last item visible at the end of the grid from the start.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub keep_last_visible: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            page_url: default_page_url(),
            initial_visible: default_initial_visible(),
            reveal_batch: default_reveal_batch(),
            keep_last_visible: Some(true),
        }
    }
}

impl GalleryConfig {
    /// Initial thumbnail count, clamped to the supported range.
    #[must_use]
    pub fn initial_visible(&self) -> usize {
        self.initial_visible
            .unwrap_or(DEFAULT_INITIAL_VISIBLE)
            .clamp(MIN_THUMBNAIL_COUNT, MAX_THUMBNAIL_COUNT)
    }

    /// Reveal batch size, clamped to the supported range.
    #[must_use]
    pub fn reveal_batch(&self) -> usize {
        self.reveal_batch
            .unwrap_or(DEFAULT_REVEAL_BATCH)
            .clamp(MIN_THUMBNAIL_COUNT, MAX_THUMBNAIL_COUNT)
    }
}

/// Zoom behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Scale applied by click or double tap on an unzoomed image.
    #[serde(
        default = "default_zoom_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub click_scale: Option<f32>,
}

impl ZoomConfig {
    /// Click scale, kept high enough that a click always zooms in.
    #[must_use]
    pub fn click_scale(&self) -> f32 {
        self.click_scale
            .filter(|scale| scale.is_finite())
            .unwrap_or(DEFAULT_ZOOM_SCALE)
            .clamp(MIN_CLICK_ZOOM_SCALE, MAX_ZOOM_SCALE)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            click_scale: default_zoom_scale(),
        }
    }
}

/// Share widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareConfig {
    /// Text used when the current media has no caption.
    #[serde(
        default = "default_share_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub share_text: Option<String>,

    /// How long the "link copied" tooltip stays visible (milliseconds).
    #[serde(
        default = "default_tooltip_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tooltip_ms: Option<u64>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            share_text: default_share_text(),
            tooltip_ms: default_tooltip_ms(),
        }
    }
}

/// Greeting gate settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessConfig {
    /// Hex-encoded BLAKE3 hash of the passphrase. No hash means no gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase_hash: Option<String>,
}

/// Install prompt settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Days the prompt stays hidden after dismissal.
    #[serde(
        default = "default_cooldown_days",
        skip_serializing_if = "Option::is_none"
    )]
    pub cooldown_days: Option<u32>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            cooldown_days: default_cooldown_days(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub share: ShareConfig,

    #[serde(default)]
    pub access: AccessConfig,

    #[serde(default)]
    pub prompt: PromptConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_manifest() -> Option<String> {
    Some(DEFAULT_MANIFEST.to_string())
}

fn default_page_url() -> Option<String> {
    Some(DEFAULT_PAGE_URL.to_string())
}

fn default_initial_visible() -> Option<usize> {
    Some(DEFAULT_INITIAL_VISIBLE)
}

fn default_reveal_batch() -> Option<usize> {
    Some(DEFAULT_REVEAL_BATCH)
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_zoom_scale() -> Option<f32> {
    Some(DEFAULT_ZOOM_SCALE)
}

fn default_share_text() -> Option<String> {
    Some(DEFAULT_SHARE_TEXT.to_string())
}

fn default_tooltip_ms() -> Option<u64> {
    Some(DEFAULT_TOOLTIP_MS)
}

fn default_cooldown_days() -> Option<u32> {
    Some(DEFAULT_PROMPT_COOLDOWN_DAYS)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the resolved config directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load(paths: &AppPaths) -> (Config, Option<String>) {
    if let Some(path) = paths.config_file() {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config, paths: &AppPaths) -> Result<()> {
    if let Some(path) = paths.config_file() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
