// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.

use crate::domain::ui::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Image offset when the drag started
    pub start_offset: Option<Vector>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Calculates the image offset for the current cursor position.
    ///
    /// The image follows the cursor, so the offset moves by the cursor delta.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        Some(start_offset + (current_position - start_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn start_then_stop_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        assert!(state.is_dragging);
        assert_eq!(state.start_offset, Some(Vector::new(20.0, 10.0)));

        state.stop();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
    }

    #[test]
    fn calculate_offset_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_offset(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn image_follows_cursor() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(5.0, -5.0));

        // Cursor moved left/up by 20 pixels
        let offset = state.calculate_offset(Point::new(180.0, 130.0));
        assert_eq!(offset, Some(Vector::new(-15.0, -25.0)));
    }
}
