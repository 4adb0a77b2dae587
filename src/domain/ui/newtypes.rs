// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom scale bounds (1× to 5×).
pub mod zoom_bounds {
    /// Minimum zoom scale (image fits the modal).
    pub const MIN_SCALE: f32 = 1.0;
    /// Maximum zoom scale.
    pub const MAX_SCALE: f32 = 5.0;
    /// Scale applied by a click or double tap on an unzoomed image.
    pub const DEFAULT_ZOOM_SCALE: f32 = 2.0;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom multiplier, guaranteed to be within valid range (1×–5×).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// The unzoomed scale.
    pub const ONE: Self = Self(zoom_bounds::MIN_SCALE);

    /// Creates a new zoom scale, clamping the value to the valid range.
    ///
    /// NaN collapses to the minimum scale.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::ONE;
        }
        Self(scale.clamp(zoom_bounds::MIN_SCALE, zoom_bounds::MAX_SCALE))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_SCALE
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_SCALE
    }

    /// Multiplies the scale by `factor`, clamping the result.
    #[must_use]
    pub fn multiply(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::ONE
    }
}

// =============================================================================
// Tooltip Timeout Bounds
// =============================================================================

/// Tooltip display bounds (500 ms to 10 s).
pub mod tooltip_bounds {
    /// Minimum tooltip lifetime in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum tooltip lifetime in milliseconds.
    pub const MAX_MS: u64 = 10_000;
    /// Default tooltip lifetime in milliseconds.
    pub const DEFAULT_MS: u64 = 2_000;
}

// =============================================================================
// TooltipTimeout
// =============================================================================

/// How long a transient tooltip (e.g. "Link copied") stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipTimeout(u64);

impl TooltipTimeout {
    /// Creates a new tooltip timeout, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(tooltip_bounds::MIN_MS, tooltip_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TooltipTimeout {
    fn default() -> Self {
        Self(tooltip_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_scale_clamps_to_range() {
        assert_eq!(ZoomScale::new(0.2).value(), zoom_bounds::MIN_SCALE);
        assert_eq!(ZoomScale::new(42.0).value(), zoom_bounds::MAX_SCALE);
        assert_eq!(ZoomScale::new(2.5).value(), 2.5);
    }

    #[test]
    fn zoom_scale_nan_is_one() {
        assert_eq!(ZoomScale::new(f32::NAN), ZoomScale::ONE);
    }

    #[test]
    fn zoom_scale_multiply_clamps() {
        let scale = ZoomScale::new(4.0).multiply(2.0);
        assert!(scale.is_max());
        let scale = ZoomScale::new(2.0).multiply(0.1);
        assert!(scale.is_min());
    }

    #[test]
    fn tooltip_timeout_clamps_and_converts() {
        assert_eq!(TooltipTimeout::new(10).value(), tooltip_bounds::MIN_MS);
        assert_eq!(TooltipTimeout::new(60_000).value(), tooltip_bounds::MAX_MS);
        assert_eq!(
            TooltipTimeout::default().as_duration(),
            Duration::from_millis(2_000)
        );
    }
}
