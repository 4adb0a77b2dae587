// SPDX-License-Identifier: MPL-2.0
//! Share tooltip placement and lifetime.

use crate::domain::ui::{Point, Rect, Size, TooltipTimeout};
use std::time::Instant;

/// Space between the anchor and the tooltip.
pub const TOOLTIP_GAP: f32 = 8.0;

/// Minimum distance kept from the viewport edges.
pub const VIEWPORT_MARGIN: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    /// Top-left corner of the tooltip.
    pub origin: Point,
    pub placement: Placement,
}

/// Places a tooltip of size `tooltip` next to `anchor` inside `viewport`.
///
/// The tooltip is centered above the anchor, flipped below when it would
/// leave the top edge, and shifted horizontally to stay on screen.
#[must_use]
pub fn position(anchor: Rect, tooltip: Size, viewport: Size) -> TooltipPosition {
    let max_x = (viewport.width - tooltip.width - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let x = (anchor.center_x() - tooltip.width / 2.0).clamp(VIEWPORT_MARGIN, max_x);

    let above = anchor.y - TOOLTIP_GAP - tooltip.height;
    if above >= VIEWPORT_MARGIN {
        TooltipPosition {
            origin: Point::new(x, above),
            placement: Placement::Above,
        }
    } else {
        TooltipPosition {
            origin: Point::new(x, anchor.bottom() + TOOLTIP_GAP),
            placement: Placement::Below,
        }
    }
}

/// A transient message attached to a share button.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTooltip {
    message_key: &'static str,
    anchor: Rect,
    shown_at: Instant,
    timeout: TooltipTimeout,
}

impl ActiveTooltip {
    #[must_use]
    pub fn new(message_key: &'static str, anchor: Rect, shown_at: Instant, timeout: TooltipTimeout) -> Self {
        Self {
            message_key,
            anchor,
            shown_at,
            timeout,
        }
    }

    #[must_use]
    pub fn message_key(&self) -> &'static str {
        self.message_key
    }

    #[must_use]
    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.timeout.as_duration()
    }
}
