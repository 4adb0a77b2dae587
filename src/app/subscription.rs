// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard, touch and window events are routed to `App::update` as
//! [`Message::RawEvent`]. Mouse events over the modal come from the media
//! area's own `mouse_area`, so only touch and keyboard need the raw stream.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval while something time-based is pending.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes native events that widgets did not capture.
///
/// Window resizes and close requests are always forwarded; keyboard input
/// only when no text input consumed it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match &event {
        event::Event::Window(
            iced::window::Event::Resized(_)
            | iced::window::Event::Opened { .. }
            | iced::window::Event::CloseRequested,
        )
        | event::Event::Touch(_) => Some(Message::RawEvent {
            window: window_id,
            event: event.clone(),
        }),
        event::Event::Keyboard(_) => match status {
            event::Status::Ignored => Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Periodic tick for pinch settle, tooltip expiry and notification
/// auto-dismiss. Off when nothing is waiting.
pub fn create_tick_subscription(
    has_pending_settle: bool,
    has_tooltip: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if has_pending_settle || has_tooltip || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

impl super::App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        let event_sub = create_event_subscription();
        let tick_sub = create_tick_subscription(
            self.gallery.state().zoom().has_pending_settle(),
            self.tooltip.is_some(),
            self.notifications.has_notifications(),
        );
        Subscription::batch([event_sub, tick_sub])
    }
}
