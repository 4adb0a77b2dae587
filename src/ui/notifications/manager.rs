// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits the number of visible toasts, queues the rest and
//! drops expired ones on each tick.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

const LOAD_ERROR_PREFIX: &str = "notification-load-error-";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification now, or queues it when `MAX_VISIBLE` are up.
    ///
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(key = notification.message_key(), "notification"),
            Severity::Error => tracing::error!(key = notification.message_key(), "notification"),
            Severity::Success | Severity::Info => {}
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that has expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss_at(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Drops stale manifest errors once a reload succeeds.
    pub fn clear_load_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible
            .retain(|n| !n.message_key().starts_with(LOAD_ERROR_PREFIX));
        self.queue
            .retain(|n| !n.message_key().starts_with(LOAD_ERROR_PREFIX));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_expires_success_but_keeps_errors() {
        let mut manager = Manager::new();
        let success = Notification::success("share-link-copied");
        let later = success.created_at() + Duration::from_secs(10);
        manager.push(success);
        manager.push(Notification::error("notification-playback-error-launch"));

        manager.handle_message(&Message::Tick(later));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::message_key),
            Some("notification-playback-error-launch")
        );
    }

    #[test]
    fn clear_load_errors_removes_only_load_error_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-load-error-io"));
        manager.push(Notification::warning("notification-load-error-network"));
        manager.push(Notification::success("share-link-copied"));
        manager.push(Notification::error("notification-storage-error"));

        assert_eq!(manager.visible_count(), 3);
        assert_eq!(manager.queued_count(), 1);

        manager.clear_load_errors();

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager
            .visible()
            .all(|n| !n.message_key().starts_with(LOAD_ERROR_PREFIX)));
    }
}
