// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Manifest location and progressive thumbnail reveal
//! - **Zoom**: Click/wheel/pinch zoom behavior
//! - **Gestures**: Swipe and double-tap recognition thresholds
//! - **Share**: Share text and tooltip lifetime
//! - **Prompt**: Dismissal cooldown for the install prompt

pub use crate::domain::ui::newtypes::tooltip_bounds::DEFAULT_MS as DEFAULT_TOOLTIP_MS;
pub use crate::domain::ui::newtypes::zoom_bounds::{
    DEFAULT_ZOOM_SCALE, MAX_SCALE as MAX_ZOOM_SCALE, MIN_SCALE as MIN_ZOOM_SCALE,
};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Manifest file name produced by `generate-manifest`.
pub const DEFAULT_MANIFEST: &str = "gallery-data.json";

/// Public URL of the greeting page, used for share links.
pub const DEFAULT_PAGE_URL: &str = "https://birthday.example.com/";

/// Number of thumbnails rendered before "see more" is pressed.
pub const DEFAULT_INITIAL_VISIBLE: usize = 9;

/// Number of thumbnails revealed per "see more" press.
pub const DEFAULT_REVEAL_BATCH: usize = 6;

/// Minimum value accepted for either thumbnail count.
pub const MIN_THUMBNAIL_COUNT: usize = 1;

/// Maximum value accepted for either thumbnail count.
pub const MAX_THUMBNAIL_COUNT: usize = 60;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Smallest click/double-tap scale; anything lower would not zoom at all.
pub const MIN_CLICK_ZOOM_SCALE: f32 = 1.1;

/// Scale multiplier applied per mouse wheel notch.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Delay after a pinch ends before a near-1× scale snaps back.
pub const PINCH_SETTLE_MS: u64 = 300;

/// Scales at or below this are treated as unzoomed when a pinch settles.
pub const PINCH_SNAP_THRESHOLD: f32 = 1.05;

/// Fraction of the pan bound that is passed through unchanged; beyond it the
/// offset eases toward the bound.
pub const PAN_EASE_KNEE: f32 = 0.8;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum travel in logical pixels for a pointer stroke to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;

/// Longest stroke duration recognized as a swipe.
pub const SWIPE_MAX_DURATION_MS: u64 = 600;

/// Maximum interval between two taps of a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Maximum distance between two taps of a double tap.
pub const DOUBLE_TAP_MAX_DISTANCE: f32 = 30.0;

/// Travel below which a press/release pair counts as a tap.
pub const TAP_SLOP: f32 = 8.0;

// ==========================================================================
// Share Defaults
// ==========================================================================

/// Text attached to shared links when the media has no caption.
pub const DEFAULT_SHARE_TEXT: &str = "Happy birthday!";

// ==========================================================================
// Prompt Defaults
// ==========================================================================

/// Days the install prompt stays hidden after being dismissed.
pub const DEFAULT_PROMPT_COOLDOWN_DAYS: u32 = 7;

/// Longest accepted cooldown.
pub const MAX_PROMPT_COOLDOWN_DAYS: u32 = 365;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_defaults_are_within_bounds() {
        assert!((MIN_THUMBNAIL_COUNT..=MAX_THUMBNAIL_COUNT).contains(&DEFAULT_INITIAL_VISIBLE));
        assert!((MIN_THUMBNAIL_COUNT..=MAX_THUMBNAIL_COUNT).contains(&DEFAULT_REVEAL_BATCH));
    }

    #[test]
    fn zoom_defaults_are_consistent() {
        assert!(DEFAULT_ZOOM_SCALE > MIN_ZOOM_SCALE);
        assert!(DEFAULT_ZOOM_SCALE < MAX_ZOOM_SCALE);
        assert!(PINCH_SNAP_THRESHOLD > MIN_ZOOM_SCALE);
        assert!(MIN_CLICK_ZOOM_SCALE > MIN_ZOOM_SCALE);
        assert!(DEFAULT_ZOOM_SCALE >= MIN_CLICK_ZOOM_SCALE);
        assert!(PAN_EASE_KNEE > 0.0 && PAN_EASE_KNEE < 1.0);
    }

    #[test]
    fn cooldown_default_is_within_bounds() {
        assert!(DEFAULT_PROMPT_COOLDOWN_DAYS <= MAX_PROMPT_COOLDOWN_DAYS);
    }
}
