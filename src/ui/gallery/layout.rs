// SPDX-License-Identifier: MPL-2.0
//! Fixed geometry of the modal and the share bar.
//!
//! The view lays widgets out with these numbers, and the update loop uses
//! the same numbers to know where the media area and share buttons are
//! without querying the widget tree.

use crate::domain::ui::{Point, Rect, Size, Vector};
use crate::ui::design_tokens::{sizing, spacing};

/// Height of the modal's top bar (counter and window buttons).
pub const TOP_BAR_HEIGHT: f32 = sizing::BUTTON_HEIGHT + 2.0 * spacing::XS;

/// Width of the previous/next columns on each side of the media.
pub const NAV_GUTTER: f32 = 56.0;

pub const SHARE_BUTTON_WIDTH: f32 = 120.0;

/// Top-left corner of the media area in window coordinates.
#[must_use]
pub fn media_origin() -> Point {
    Point::new(NAV_GUTTER, TOP_BAR_HEIGHT)
}

/// Size of the media area for a window of `window` size.
#[must_use]
pub fn media_viewport(window: Size) -> Size {
    Size::new(
        (window.width - 2.0 * NAV_GUTTER).max(0.0),
        (window.height - TOP_BAR_HEIGHT - sizing::SHARE_BAR_HEIGHT).max(0.0),
    )
}

/// Converts a window position into media-area coordinates.
#[must_use]
pub fn to_media_coordinates(position: Point) -> Point {
    let origin = media_origin();
    Point::new(position.x - origin.x, position.y - origin.y)
}

/// Bounds of the `index`-th of `count` share buttons, centered in the share
/// bar along the bottom of the window.
#[must_use]
pub fn share_button_anchor(index: usize, count: usize, window: Size) -> Rect {
    let count = count.max(1) as f32;
    let total = count * SHARE_BUTTON_WIDTH + (count - 1.0) * spacing::XS;
    let left = ((window.width - total) / 2.0).max(0.0);
    let top = window.height - sizing::SHARE_BAR_HEIGHT
        + (sizing::SHARE_BAR_HEIGHT - sizing::BUTTON_HEIGHT) / 2.0;

    Rect::new(
        left + index as f32 * (SHARE_BUTTON_WIDTH + spacing::XS),
        top,
        SHARE_BUTTON_WIDTH,
        sizing::BUTTON_HEIGHT,
    )
}

/// Relative scroll position that shows an image of `scaled` size inside
/// `viewport` with its center moved by `offset`.
///
/// Axes where the image fits are centered by padding and report `0.5`.
#[must_use]
pub fn scroll_fraction(scaled: Size, viewport: Size, offset: Vector) -> (f32, f32) {
    fn axis(scaled: f32, viewport: f32, offset: f32) -> f32 {
        let overflow = scaled - viewport;
        if overflow <= 0.0 {
            return 0.5;
        }
        ((overflow / 2.0 - offset) / overflow).clamp(0.0, 1.0)
    }
    (
        axis(scaled.width, viewport.width, offset.x),
        axis(scaled.height, viewport.height, offset.y),
    )
}

/// Padding that centers `content` inside `available`.
#[must_use]
pub fn centering_padding(content: Size, available: Size) -> (f32, f32) {
    (
        ((available.width - content.width) / 2.0).max(0.0),
        ((available.height - content.height) / 2.0).max(0.0),
    )
}
