// SPDX-License-Identifier: MPL-2.0
//! Touch gesture recognition for the modal viewer.
//!
//! One finger produces drags, taps, double taps and swipes. A second finger
//! turns the interaction into a pinch until either finger lifts; the
//! remaining finger is then ignored until it lifts too.

use crate::application::port::{Gesture, GestureCapability, PointerInput};
use crate::config::defaults::{
    DOUBLE_TAP_MAX_DISTANCE, DOUBLE_TAP_WINDOW_MS, SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE,
    TAP_SLOP,
};
use crate::domain::ui::Point;
use std::time::{Duration, Instant};

/// A single-finger interaction in progress.
#[derive(Debug, Clone, Copy)]
struct Stroke {
    id: u64,
    start: Point,
    started_at: Instant,
    last: Point,
}

#[derive(Debug, Clone, Copy)]
struct Pinch {
    ids: (u64, u64),
    start_distance: f32,
}

/// Recognizes swipes, double taps and pinches from raw pointer input.
#[derive(Debug, Clone, Default)]
pub struct TouchGestures {
    pointers: Vec<(u64, Point)>,
    stroke: Option<Stroke>,
    pinch: Option<Pinch>,
    last_tap: Option<(Point, Instant)>,
}

impl TouchGestures {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, id: u64) -> Option<Point> {
        self.pointers
            .iter()
            .find(|(pointer, _)| *pointer == id)
            .map(|(_, position)| *position)
    }

    fn update_pointer(&mut self, id: u64, position: Point) {
        if let Some(entry) = self.pointers.iter_mut().find(|(pointer, _)| *pointer == id) {
            entry.1 = position;
        }
    }

    fn remove_pointer(&mut self, id: u64) {
        self.pointers.retain(|(pointer, _)| *pointer != id);
    }

    fn pressed(&mut self, id: u64, position: Point, at: Instant) -> Option<Gesture> {
        if self.pointers.len() >= 2 {
            return None;
        }
        self.pointers.push((id, position));

        match self.pointers.as_slice() {
            [_] => {
                self.stroke = Some(Stroke {
                    id,
                    start: position,
                    started_at: at,
                    last: position,
                });
                None
            }
            [(first, a), (second, b)] => {
                self.stroke = None;
                let distance = a.distance(*b);
                if distance <= f32::EPSILON {
                    return None;
                }
                self.pinch = Some(Pinch {
                    ids: (*first, *second),
                    start_distance: distance,
                });
                Some(Gesture::PinchStarted)
            }
            _ => None,
        }
    }

    fn moved(&mut self, id: u64, position: Point) -> Option<Gesture> {
        self.update_pointer(id, position);

        if let Some(pinch) = self.pinch {
            let a = self.position_of(pinch.ids.0)?;
            let b = self.position_of(pinch.ids.1)?;
            let center = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
            return Some(Gesture::Pinched {
                scale: a.distance(b) / pinch.start_distance,
                center,
            });
        }

        let stroke = self.stroke.as_mut().filter(|stroke| stroke.id == id)?;
        let delta = position - stroke.last;
        stroke.last = position;
        Some(Gesture::Dragged(delta))
    }

    fn released(&mut self, id: u64, position: Point, at: Instant) -> Option<Gesture> {
        self.remove_pointer(id);

        if let Some(pinch) = self.pinch {
            if pinch.ids.0 == id || pinch.ids.1 == id {
                self.pinch = None;
                self.stroke = None;
                return Some(Gesture::PinchEnded);
            }
        }

        let stroke = self.stroke.take().filter(|stroke| stroke.id == id)?;
        let travel = position - stroke.start;

        if travel.length() <= TAP_SLOP {
            return self.tap(position, at);
        }

        let elapsed = at.saturating_duration_since(stroke.started_at);
        if elapsed > Duration::from_millis(SWIPE_MAX_DURATION_MS) {
            return None;
        }

        if travel.x.abs() >= travel.y.abs() {
            if travel.x.abs() < SWIPE_MIN_DISTANCE {
                return None;
            }
            Some(if travel.x < 0.0 {
                Gesture::SwipeLeft
            } else {
                Gesture::SwipeRight
            })
        } else {
            if travel.y.abs() < SWIPE_MIN_DISTANCE {
                return None;
            }
            Some(if travel.y < 0.0 {
                Gesture::SwipeUp
            } else {
                Gesture::SwipeDown
            })
        }
    }

    fn tap(&mut self, position: Point, at: Instant) -> Option<Gesture> {
        if let Some((previous, previous_at)) = self.last_tap.take() {
            let within_window = at.saturating_duration_since(previous_at)
                <= Duration::from_millis(DOUBLE_TAP_WINDOW_MS);
            if within_window && previous.distance(position) <= DOUBLE_TAP_MAX_DISTANCE {
                return Some(Gesture::DoubleTap(position));
            }
        }
        self.last_tap = Some((position, at));
        None
    }

    fn lost(&mut self, id: u64) -> Option<Gesture> {
        self.remove_pointer(id);
        self.stroke = None;
        if self.pinch.take().is_some() {
            return Some(Gesture::PinchEnded);
        }
        None
    }
}

impl GestureCapability for TouchGestures {
    fn feed(&mut self, input: PointerInput) -> Option<Gesture> {
        match input {
            PointerInput::Pressed { id, position, at } => self.pressed(id, position, at),
            PointerInput::Moved { id, position, .. } => self.moved(id, position),
            PointerInput::Released { id, position, at } => self.released(id, position, at),
            PointerInput::Lost { id } => self.lost(id),
        }
    }

    fn detach(&mut self) {
        *self = Self::default();
    }
}
