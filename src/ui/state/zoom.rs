// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state for the modal image.
//!
//! The image is drawn scaled about the center of its container and then
//! translated by `offset`. A screen point `q` therefore shows the content
//! point that sat at `center + (q - center - offset) / scale` before zooming,
//! which is what every anchored zoom below keeps fixed.
//!
//! Offsets are always passed through [`constrain`] so the image edges never
//! travel further than half the overflow. Near the bound the offset eases in
//! instead of stopping hard.

use crate::config::defaults::{PAN_EASE_KNEE, PINCH_SETTLE_MS, PINCH_SNAP_THRESHOLD};
use crate::domain::ui::{Point, Size, Vector, ZoomScale};
use std::time::{Duration, Instant};

pub use crate::config::defaults::{DEFAULT_ZOOM_SCALE, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};

/// Scale and offset captured when a pinch begins.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchBase {
    scale: ZoomScale,
    offset: Vector,
}

/// Manages the zoom transform of the displayed image.
#[derive(Debug, Clone)]
pub struct ZoomPanState {
    scale: ZoomScale,
    offset: Vector,
    is_zoomed: bool,

    /// Size of the area the image is displayed in.
    container: Size,

    /// Size of the image at scale 1, as laid out in the container.
    content: Size,

    /// Scale used by click and double-tap zoom.
    click_scale: ZoomScale,

    pinch: Option<PinchBase>,
    settle_deadline: Option<Instant>,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self::new(ZoomScale::new(DEFAULT_ZOOM_SCALE))
    }
}

impl ZoomPanState {
    #[must_use]
    pub fn new(click_scale: ZoomScale) -> Self {
        Self {
            scale: ZoomScale::ONE,
            offset: Vector::ZERO,
            is_zoomed: false,
            container: Size::ZERO,
            content: Size::ZERO,
            click_scale,
            pinch: None,
            settle_deadline: None,
        }
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Records the container and unscaled content sizes used for bounds.
    pub fn set_bounds(&mut self, container: Size, content: Size) {
        self.container = container;
        self.content = content;
        self.offset = self.constrain(self.offset);
    }

    /// Back to scale 1, no offset, no pending pinch.
    pub fn reset_zoom(&mut self) {
        self.scale = ZoomScale::ONE;
        self.offset = Vector::ZERO;
        self.is_zoomed = false;
        self.pinch = None;
        self.settle_deadline = None;
    }

    /// Zooms to the click scale keeping `pointer` fixed on screen.
    pub fn zoom_at(&mut self, pointer: Point) {
        let scale = self.click_scale;
        let from_center = pointer - self.container.center();
        self.scale = scale;
        self.offset = self.constrain(from_center.scale(-(scale.value() - 1.0)));
        self.is_zoomed = !scale.is_min();
    }

    /// Click / double-tap behavior: zoom in at `pointer`, or reset if zoomed.
    pub fn toggle_zoom_at(&mut self, pointer: Point) {
        if self.is_zoomed {
            self.reset_zoom();
        } else {
            self.zoom_at(pointer);
        }
    }

    /// Multiplies the scale by `factor`, anchored at `pointer` (mouse wheel).
    pub fn zoom_by(&mut self, factor: f32, pointer: Point) {
        let target = self.scale.multiply(factor);
        self.rescale_from(self.scale, self.offset, target, pointer);
    }

    /// Translates a zoomed image. Returns `false` when not zoomed.
    pub fn pan(&mut self, delta: Vector) -> bool {
        if !self.is_zoomed {
            return false;
        }
        self.offset = self.constrain(self.offset + delta);
        true
    }

    /// Moves a zoomed image to an absolute offset (drag).
    pub fn pan_to(&mut self, offset: Vector) -> bool {
        if !self.is_zoomed {
            return false;
        }
        self.offset = self.constrain(offset);
        true
    }

    /// Begins a pinch, cancelling any pending settle.
    pub fn pinch_start(&mut self) {
        self.settle_deadline = None;
        self.pinch = Some(PinchBase {
            scale: self.scale,
            offset: self.offset,
        });
    }

    /// Applies a pinch whose fingers are now `gesture_scale` times their
    /// starting distance apart, centered on `center`.
    pub fn pinch_update(&mut self, gesture_scale: f32, center: Point) {
        let Some(base) = self.pinch else {
            return;
        };
        let target = base.scale.multiply(gesture_scale);
        self.rescale_from(base.scale, base.offset, target, center);
    }

    /// Ends a pinch and arms the settle timer.
    pub fn pinch_end(&mut self, now: Instant) {
        if self.pinch.take().is_some() {
            self.settle_deadline = Some(now + Duration::from_millis(PINCH_SETTLE_MS));
        }
    }

    /// Runs the settle step once its deadline has passed. A scale that
    /// ended barely above 1 snaps back to the unzoomed state.
    ///
    /// Returns `true` when the transform changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.settle_deadline {
            Some(deadline) if now >= deadline => {
                self.settle_deadline = None;
                if self.scale.value() <= PINCH_SNAP_THRESHOLD {
                    self.reset_zoom();
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn has_pending_settle(&self) -> bool {
        self.settle_deadline.is_some()
    }

    /// Soft-clamps an offset to the pan bounds of the current scale.
    #[must_use]
    pub fn constrain(&self, offset: Vector) -> Vector {
        let scale = self.scale.value();
        Vector::new(
            constrain_axis(offset.x, max_offset(self.content.width, self.container.width, scale)),
            constrain_axis(offset.y, max_offset(self.content.height, self.container.height, scale)),
        )
    }

    fn rescale_from(&mut self, scale: ZoomScale, offset: Vector, target: ZoomScale, anchor: Point) {
        let from_center = anchor - self.container.center();
        let ratio = target.value() / scale.value();
        // Keep the content point under `anchor` where it is.
        let unscaled = Vector::new(from_center.x - offset.x, from_center.y - offset.y);
        let new_offset = Vector::new(
            from_center.x - unscaled.x * ratio,
            from_center.y - unscaled.y * ratio,
        );
        self.scale = target;
        self.is_zoomed = !target.is_min();
        self.offset = if self.is_zoomed {
            self.constrain(new_offset)
        } else {
            Vector::ZERO
        };
    }
}

/// Half of the overflow of `content * scale` over `container`, or zero.
#[must_use]
pub fn max_offset(content: f32, container: f32, scale: f32) -> f32 {
    ((content * scale - container).max(0.0)) / 2.0
}

/// Soft clamp of one axis to `[-bound, bound]`.
///
/// Values within the knee pass through. Past it the remaining range is
/// approached exponentially, so the result never exceeds `bound`.
#[must_use]
pub fn constrain_axis(value: f32, bound: f32) -> f32 {
    if value.is_nan() || bound <= 0.0 {
        return 0.0;
    }
    let knee = bound * PAN_EASE_KNEE;
    let magnitude = value.abs();
    if magnitude <= knee {
        return value;
    }
    let range = bound - knee;
    let excess = magnitude - knee;
    let eased = (knee + range * (1.0 - (-excess / range).exp())).min(bound);
    eased.copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn square_state(side: f32) -> ZoomPanState {
        let mut state = ZoomPanState::default();
        state.set_bounds(Size::new(side, side), Size::new(side, side));
        state
    }

    #[test]
    fn default_state_is_unzoomed() {
        let state = ZoomPanState::default();
        assert!(!state.is_zoomed());
        assert_eq!(state.scale(), ZoomScale::ONE);
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn zoom_at_center_keeps_offset_zero() {
        let mut state = square_state(100.0);
        state.zoom_at(Point::new(50.0, 50.0));
        assert!(state.is_zoomed());
        assert_abs_diff_eq!(state.scale().value(), 2.0);
        assert_abs_diff_eq!(state.offset().x, 0.0);
        assert_abs_diff_eq!(state.offset().y, 0.0);
    }

    #[test]
    fn zoom_at_corner_moves_toward_it() {
        let mut state = square_state(100.0);
        state.zoom_at(Point::new(60.0, 40.0));
        // Raw offset is -(2-1) * (10, -10) which is inside the knee.
        assert_abs_diff_eq!(state.offset().x, -10.0);
        assert_abs_diff_eq!(state.offset().y, 10.0);
    }

    #[test]
    fn reset_zoom_clears_everything() {
        let mut state = square_state(100.0);
        state.zoom_at(Point::new(10.0, 10.0));
        state.reset_zoom();
        assert!(!state.is_zoomed());
        assert_eq!(state.scale(), ZoomScale::ONE);
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn toggle_zoom_alternates() {
        let mut state = square_state(100.0);
        state.toggle_zoom_at(Point::new(50.0, 50.0));
        assert!(state.is_zoomed());
        state.toggle_zoom_at(Point::new(50.0, 50.0));
        assert!(!state.is_zoomed());
    }

    #[test]
    fn pan_is_ignored_when_not_zoomed() {
        let mut state = square_state(100.0);
        assert!(!state.pan(Vector::new(10.0, 0.0)));
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn pan_never_exceeds_bound() {
        let mut state = square_state(100.0);
        state.zoom_at(Point::new(50.0, 50.0));
        for _ in 0..50 {
            state.pan(Vector::new(40.0, -40.0));
        }
        // bound = (200 - 100) / 2
        assert!(state.offset().x <= 50.0);
        assert!(state.offset().y >= -50.0);
        assert!(state.offset().x > 40.0);
    }

    #[test]
    fn constrain_axis_passes_values_inside_knee() {
        assert_abs_diff_eq!(constrain_axis(30.0, 50.0), 30.0);
        assert_abs_diff_eq!(constrain_axis(-40.0, 50.0), -40.0);
    }

    #[test]
    fn constrain_axis_eases_past_knee() {
        let eased = constrain_axis(60.0, 50.0);
        assert!(eased > 40.0 && eased <= 50.0);
        assert!(constrain_axis(1.0e9, 50.0) <= 50.0);
        assert!(constrain_axis(f32::NEG_INFINITY, 50.0) >= -50.0);
    }

    #[test]
    fn constrain_axis_without_overflow_is_zero() {
        assert_eq!(constrain_axis(25.0, 0.0), 0.0);
        assert_eq!(constrain_axis(f32::NAN, 10.0), 0.0);
    }

    #[test]
    fn wheel_zoom_keeps_pointer_content_fixed() {
        let mut state = square_state(100.0);
        state.zoom_by(1.5, Point::new(50.0, 50.0));
        assert_abs_diff_eq!(state.scale().value(), 1.5);
        assert_abs_diff_eq!(state.offset().x, 0.0);
        state.zoom_by(0.1, Point::new(20.0, 20.0));
        assert!(!state.is_zoomed());
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn pinch_scales_relative_to_start() {
        let mut state = square_state(100.0);
        state.pinch_start();
        state.pinch_update(2.0, Point::new(50.0, 50.0));
        assert_abs_diff_eq!(state.scale().value(), 2.0);
        state.pinch_update(3.0, Point::new(50.0, 50.0));
        assert_abs_diff_eq!(state.scale().value(), 3.0);
        state.pinch_update(10.0, Point::new(50.0, 50.0));
        assert_abs_diff_eq!(state.scale().value(), MAX_ZOOM_SCALE);
    }

    #[test]
    fn pinch_update_without_start_is_ignored() {
        let mut state = square_state(100.0);
        state.pinch_update(2.0, Point::new(50.0, 50.0));
        assert!(!state.is_zoomed());
    }

    #[test]
    fn near_one_pinch_snaps_back_after_settle() {
        let mut state = square_state(100.0);
        let now = Instant::now();
        state.pinch_start();
        state.pinch_update(1.03, Point::new(70.0, 70.0));
        state.pinch_end(now);
        assert!(state.is_zoomed());

        assert!(!state.tick(now + Duration::from_millis(100)));
        assert!(state.is_zoomed());
        assert!(state.tick(now + Duration::from_millis(PINCH_SETTLE_MS)));
        assert!(!state.is_zoomed());
    }

    #[test]
    fn new_pinch_cancels_pending_settle() {
        let mut state = square_state(100.0);
        let now = Instant::now();
        state.pinch_start();
        state.pinch_update(1.02, Point::new(50.0, 50.0));
        state.pinch_end(now);
        state.pinch_start();
        assert!(!state.has_pending_settle());
        assert!(!state.tick(now + Duration::from_secs(1)));
        assert!(state.is_zoomed());
    }

    #[test]
    fn large_pinch_survives_settle() {
        let mut state = square_state(100.0);
        let now = Instant::now();
        state.pinch_start();
        state.pinch_update(2.5, Point::new(50.0, 50.0));
        state.pinch_end(now);
        assert!(!state.tick(now + Duration::from_secs(1)));
        assert_abs_diff_eq!(state.scale().value(), 2.5);
    }
}
