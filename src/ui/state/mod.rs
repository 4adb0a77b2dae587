// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state of the modal viewer, kept
//! free of widgets so it can be tested without a window.

pub mod drag;
pub mod gesture;
pub mod tooltip;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use gesture::TouchGestures;
pub use tooltip::{ActiveTooltip, Placement, TooltipPosition};
pub use zoom::ZoomPanState;
