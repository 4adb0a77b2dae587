// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition port definition.
//!
//! Touch gestures are an optional capability: on platforms without a touch
//! screen the modal runs with [`NoGestures`], and keyboard plus mouse remain
//! fully functional.

use crate::domain::ui::{Point, Vector};
use std::time::Instant;

/// Raw pointer input as delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Pressed {
        id: u64,
        position: Point,
        at: Instant,
    },
    Moved {
        id: u64,
        position: Point,
        at: Instant,
    },
    Released {
        id: u64,
        position: Point,
        at: Instant,
    },
    /// The platform took the pointer away (e.g. a system gesture).
    Lost { id: u64 },
}

/// A recognized gesture, in the vocabulary of the modal viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Finger moved right-to-left: show the next item.
    SwipeLeft,
    /// Finger moved left-to-right: show the previous item.
    SwipeRight,
    SwipeUp,
    SwipeDown,
    DoubleTap(Point),
    /// A single finger moved by the given delta (pans a zoomed image).
    Dragged(Vector),
    PinchStarted,
    /// Scale is relative to the distance between the fingers at pinch start.
    Pinched {
        scale: f32,
        center: Point,
    },
    PinchEnded,
}

/// Port for turning pointer input into [`Gesture`]s.
pub trait GestureCapability {
    /// Returns whether this implementation recognizes anything at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Feeds one pointer event, returning a gesture when one completes.
    fn feed(&mut self, input: PointerInput) -> Option<Gesture>;

    /// Forgets all tracked pointers. Called when the modal closes and on
    /// teardown.
    fn detach(&mut self);
}

/// Capability used when touch gestures are not supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGestures;

impl GestureCapability for NoGestures {
    fn is_available(&self) -> bool {
        false
    }

    fn feed(&mut self, _input: PointerInput) -> Option<Gesture> {
        None
    }

    fn detach(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_gestures_never_recognizes_anything() {
        let mut gestures = NoGestures;
        assert!(!gestures.is_available());
        let now = Instant::now();
        let inputs = [
            PointerInput::Pressed {
                id: 0,
                position: Point::new(0.0, 0.0),
                at: now,
            },
            PointerInput::Released {
                id: 0,
                position: Point::new(300.0, 0.0),
                at: now,
            },
        ];
        for input in inputs {
            assert_eq!(gestures.feed(input), None);
        }
    }
}
