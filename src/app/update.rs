// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every handler leaves the gallery controller as the single owner of modal
//! state; afterwards [`App::sync_gallery`] turns whatever the surface asked
//! for (window mode changes, images to show) into tasks.

use super::message::{Message, ModalMessage};
use super::view::MEDIA_SCROLLABLE;
use super::App;
use crate::application::gallery::ModalKey;
use crate::application::port::{PointerInput, ShareLauncher};
use crate::application::prompt::current_platform;
use crate::application::share::SharePlatform;
use crate::config::{TAP_SLOP, WHEEL_ZOOM_FACTOR};
use crate::domain::media::MediaItem;
use crate::domain::ui::{Point, Rect, Size};
use crate::error::{Error, LoadError};
use crate::infrastructure::share::play_video;
use crate::infrastructure::SystemShareLauncher;
use crate::media::{load_image, ImageData, MediaSource};
use crate::ui::gallery::{layout, FocusTarget, WindowCommand};
use crate::ui::notifications::{self, Notification};
use crate::ui::state::ActiveTooltip;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{mouse, touch, window, Task};
use std::time::Instant;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GalleryLoaded {
                generation,
                items,
                error,
            } => self.handle_gallery_loaded(generation, items, error),
            Message::ReloadGallery => self.load_gallery(),
            Message::ImageLoaded { source, result } => self.handle_image_loaded(source, result),
            Message::ThumbnailPressed(index) => {
                self.gallery
                    .view_mut()
                    .set_focus(Some(FocusTarget::Thumbnail(index)));
                self.gallery.open(index);
                self.sync_gallery()
            }
            Message::SeeMore => {
                self.gallery
                    .view_mut()
                    .set_focus(Some(FocusTarget::SeeMore));
                self.gallery.reveal_more();
                self.sync_gallery()
            }
            Message::Modal(message) => self.handle_modal_message(message),
            Message::Share { platform, anchor } => {
                self.handle_share(platform, anchor);
                Task::none()
            }
            Message::PlayVideo => {
                self.handle_play_video();
                Task::none()
            }
            Message::PassphraseChanged(value) => {
                self.passphrase_input = value;
                Task::none()
            }
            Message::PassphraseSubmitted => self.handle_passphrase_submitted(),
            Message::Lock => {
                self.handle_lock();
                Task::none()
            }
            Message::PromptAccepted => {
                if let Err(err) = SystemShareLauncher.open_window(&self.context.page_url) {
                    tracing::warn!(error = %err, "could not open page in browser");
                    self.notifications.push(Notification::from_error(&err));
                }
                self.dismiss_prompt();
                Task::none()
            }
            Message::PromptDismissed => {
                self.dismiss_prompt();
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::RawEvent { window, event } => {
                self.window_id = Some(window);
                self.handle_raw_event(window, event)
            }
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    fn handle_gallery_loaded(
        &mut self,
        generation: u64,
        items: Vec<MediaItem>,
        error: Option<LoadError>,
    ) -> Task<Message> {
        if generation != self.load_generation {
            tracing::debug!(generation, current = self.load_generation, "ignoring stale manifest");
            return Task::none();
        }
        self.is_loading = false;

        match error {
            Some(err) => self
                .notifications
                .push(Notification::from_error(&Error::Load(err))),
            None => self.notifications.clear_load_errors(),
        }

        self.gallery.view_mut().clear_grid();
        self.gallery.set_items(items);
        self.sync_gallery()
    }

    fn handle_image_loaded(
        &mut self,
        source: String,
        result: Result<ImageData, LoadError>,
    ) -> Task<Message> {
        self.pending_images.remove(&source);
        match result {
            Ok(image) => {
                self.images.insert(source, image);
                self.update_zoom_bounds();
                return self.media_scroll_task();
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "image failed to load");
                if self.failed_images.is_empty() {
                    self.notifications
                        .push(Notification::warning("notification-image-fetch-error"));
                }
                self.failed_images.insert(source);
            }
        }
        Task::none()
    }

    fn handle_modal_message(&mut self, message: ModalMessage) -> Task<Message> {
        match message {
            ModalMessage::Close => {
                self.gallery.close();
            }
            ModalMessage::Previous => {
                self.gallery.previous();
            }
            ModalMessage::Next => {
                self.gallery.next();
            }
            ModalMessage::ToggleFullscreen => {
                self.gallery.toggle_fullscreen();
            }
            ModalMessage::ToggleMaximize => {
                self.gallery.toggle_maximize();
            }
            ModalMessage::CursorMoved(position) => {
                self.cursor = Some(position);
                if let Some(offset) = self.drag.calculate_offset(position) {
                    let travelled = self
                        .drag
                        .start_position
                        .is_some_and(|start| start.distance(position) > TAP_SLOP);
                    self.drag_moved |= travelled;
                    if self.drag_moved {
                        self.gallery.pan_to(offset);
                    }
                }
            }
            ModalMessage::CursorLeft => {
                self.cursor = None;
                self.drag.stop();
            }
            ModalMessage::MediaPressed => {
                self.drag_moved = false;
                if let Some(cursor) = self.cursor {
                    let zoom = self.gallery.state().zoom();
                    if zoom.is_zoomed() {
                        self.drag.start(cursor, zoom.offset());
                    }
                }
            }
            ModalMessage::MediaReleased => {
                if !self.drag_moved {
                    if let Some(cursor) = self.cursor {
                        self.gallery.toggle_zoom_at(cursor);
                    }
                }
                self.drag.stop();
                self.drag_moved = false;
            }
            ModalMessage::MediaDoubleClicked => {
                self.gallery.toggle_fullscreen();
            }
            ModalMessage::MediaScrolled(delta) => {
                if let Some(factor) = wheel_factor(delta) {
                    let anchor = self
                        .cursor
                        .unwrap_or_else(|| layout::media_viewport(self.window_size).center());
                    self.gallery.zoom_by(factor, anchor);
                }
            }
        }
        self.sync_gallery()
    }

    fn handle_share(&mut self, platform: SharePlatform, anchor: Rect) {
        let outcome = self.gallery.share(platform, &mut SystemShareLauncher);
        tracing::debug!(platform = platform.as_str(), ?outcome, "share");
        if let Some(key) = outcome.tooltip_key() {
            self.tooltip = Some(ActiveTooltip::new(
                key,
                anchor,
                Instant::now(),
                self.tooltip_timeout,
            ));
        }
    }

    fn handle_play_video(&mut self) {
        let Some(item) = self.gallery.state().current_item() else {
            return;
        };
        if !item.is_video() {
            return;
        }
        if let Err(err) = play_video(item.source()) {
            tracing::error!(source = item.source(), error = %err, "video playback failed");
            self.notifications
                .push(Notification::from_error(&Error::Playback(err)));
        }
    }

    fn handle_passphrase_submitted(&mut self) -> Task<Message> {
        let attempt = std::mem::take(&mut self.passphrase_input);
        if self.context.unlock(&attempt, &mut self.store) {
            self.gate_rejected = false;
            self.mount_gallery()
        } else {
            self.gate_rejected = true;
            Task::none()
        }
    }

    fn handle_lock(&mut self) {
        self.gallery.close();
        self.context.lock(&mut self.store);
        if !self.context.authenticated {
            // Drop the in-flight load, if any, and forget the media.
            self.load_generation += 1;
            self.is_loading = false;
            self.gallery.view_mut().clear_grid();
            self.gallery.set_items(Vec::new());
            self.images.clear();
            self.failed_images.clear();
            self.prompt_visible = false;
        }
    }

    fn dismiss_prompt(&mut self) {
        self.prompt_visible = false;
        if !self
            .prompt
            .record_dismissal(&mut self.store, current_platform(), chrono::Utc::now())
        {
            self.notifications
                .push(Notification::warning("notification-storage-error"));
        }
    }

    fn handle_raw_event(&mut self, window: window::Id, event: iced::Event) -> Task<Message> {
        match event {
            iced::Event::Window(window::Event::Opened { size, .. })
            | iced::Event::Window(window::Event::Resized(size)) => {
                self.window_size = Size::new(size.width, size.height);
                self.update_zoom_bounds();
                self.media_scroll_task()
            }
            iced::Event::Window(window::Event::CloseRequested) => {
                self.gallery.teardown();
                window::close(window)
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(&key)
            }
            iced::Event::Touch(touch_event) => {
                let input = pointer_input(touch_event, Instant::now());
                self.gallery.handle_pointer(input, Instant::now());
                self.sync_gallery()
            }
            _ => Task::none(),
        }
    }

    fn handle_key(&mut self, key: &Key) -> Task<Message> {
        if self.gallery.state().is_open() {
            self.gallery.handle_key(&modal_key(key));
            return self.sync_gallery();
        }

        // Closed modal: minimal focus handling on the grid.
        match key {
            Key::Named(Named::Tab) => {
                let next = next_focus(
                    self.gallery.view().focus(),
                    self.gallery.view().revealed(),
                    self.gallery.view().is_see_more_visible(),
                );
                self.gallery.view_mut().set_focus(next);
                Task::none()
            }
            Key::Named(Named::Enter | Named::Space) => match self.gallery.view().focus() {
                Some(FocusTarget::Thumbnail(index)) => self.update(Message::ThumbnailPressed(index)),
                Some(FocusTarget::SeeMore) => self.update(Message::SeeMore),
                None => Task::none(),
            },
            _ => Task::none(),
        }
    }

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.notifications
            .handle_message(&notifications::NotificationMessage::Tick(now));
        if self.tooltip.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.tooltip = None;
        }
        if self.gallery.tick(now) {
            return self.media_scroll_task();
        }
        Task::none()
    }

    /// Applies surface requests: window mode changes and image loads.
    pub(super) fn sync_gallery(&mut self) -> Task<Message> {
        let mut tasks: Vec<Task<Message>> = self
            .gallery
            .view_mut()
            .drain_window_commands()
            .into_iter()
            .filter_map(|command| self.window_task(command))
            .collect();

        let mut wanted: Vec<String> = self
            .gallery
            .view()
            .revealed()
            .iter()
            .filter_map(|&index| self.gallery.state().items().get(index))
            .map(|item| item.thumb().to_string())
            .collect();
        if let Some(displayed) = self.gallery.view().displayed() {
            if displayed.item.is_image() {
                wanted.push(displayed.item.source().to_string());
            }
        }
        tasks.extend(wanted.into_iter().filter_map(|source| self.request_image(source)));

        self.update_zoom_bounds();
        tasks.push(self.media_scroll_task());
        Task::batch(tasks)
    }

    /// Moves the media scrollable to match the current zoom and pan.
    fn media_scroll_task(&self) -> Task<Message> {
        let Some(image) = self
            .gallery
            .view()
            .displayed()
            .and_then(|displayed| self.images.get(displayed.item.source()))
        else {
            return Task::none();
        };
        let viewport = layout::media_viewport(self.window_size);
        let (scale, offset) = self.gallery.view().transform();
        let fitted = image.fit_within(viewport);
        let scaled = Size::new(fitted.width * scale.value(), fitted.height * scale.value());
        let (x, y) = layout::scroll_fraction(scaled, viewport, offset);
        operation::snap_to(Id::new(MEDIA_SCROLLABLE), RelativeOffset { x, y })
    }

    fn window_task(&self, command: WindowCommand) -> Option<Task<Message>> {
        let Some(id) = self.window_id else {
            tracing::debug!(?command, "no window yet, dropping window command");
            return None;
        };
        Some(match command {
            WindowCommand::Fullscreen(true) => window::set_mode(id, window::Mode::Fullscreen),
            WindowCommand::Fullscreen(false) => window::set_mode(id, window::Mode::Windowed),
            WindowCommand::Maximize(maximized) => window::maximize(id, maximized),
        })
    }

    fn request_image(&mut self, source: String) -> Option<Task<Message>> {
        if source.is_empty()
            || self.images.contains_key(&source)
            || self.pending_images.contains(&source)
            || self.failed_images.contains(&source)
        {
            return None;
        }
        self.pending_images.insert(source.clone());

        let media_source = MediaSource::from_reference(&source);
        let client = self.http.clone();
        Some(Task::perform(load_image(media_source, client), move |result| {
            Message::ImageLoaded {
                source: source.clone(),
                result,
            }
        }))
    }

    /// Tells the zoom engine how large the media area and image are.
    fn update_zoom_bounds(&mut self) {
        let container = layout::media_viewport(self.window_size);
        let content = self
            .gallery
            .view()
            .displayed()
            .filter(|displayed| displayed.item.is_image())
            .and_then(|displayed| self.images.get(displayed.item.source()))
            .map_or(Size::ZERO, |image| image.fit_within(container));
        self.gallery.set_zoom_bounds(container, content);
    }
}

/// Maps an iced key to the modal's key vocabulary.
pub(super) fn modal_key(key: &Key) -> ModalKey {
    match key {
        Key::Named(Named::Escape) => ModalKey::Escape,
        Key::Named(Named::ArrowLeft) => ModalKey::ArrowLeft,
        Key::Named(Named::ArrowRight) => ModalKey::ArrowRight,
        Key::Character(c) => ModalKey::Character(c.to_string()),
        _ => ModalKey::Other,
    }
}

/// Zoom factor for one wheel event, `None` for a horizontal-only scroll.
pub(super) fn wheel_factor(delta: mouse::ScrollDelta) -> Option<f32> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
    };
    if y > 0.0 {
        Some(WHEEL_ZOOM_FACTOR)
    } else if y < 0.0 {
        Some(1.0 / WHEEL_ZOOM_FACTOR)
    } else {
        None
    }
}

/// Converts a touch event into pointer input in media-area coordinates.
pub(super) fn pointer_input(event: touch::Event, at: Instant) -> PointerInput {
    let media = |position: iced::Point| {
        layout::to_media_coordinates(Point::new(position.x, position.y))
    };
    match event {
        touch::Event::FingerPressed { id, position } => PointerInput::Pressed {
            id: id.0,
            position: media(position),
            at,
        },
        touch::Event::FingerMoved { id, position } => PointerInput::Moved {
            id: id.0,
            position: media(position),
            at,
        },
        touch::Event::FingerLifted { id, position } => PointerInput::Released {
            id: id.0,
            position: media(position),
            at,
        },
        touch::Event::FingerLost { id, .. } => PointerInput::Lost { id: id.0 },
    }
}

/// Tab order over the grid: revealed thumbnails, then "see more", then
/// back to the first thumbnail.
pub(super) fn next_focus(
    current: Option<FocusTarget>,
    revealed: &[usize],
    see_more_visible: bool,
) -> Option<FocusTarget> {
    let first = revealed.first().map(|&index| FocusTarget::Thumbnail(index));
    let after_last = if see_more_visible {
        Some(FocusTarget::SeeMore)
    } else {
        first
    };
    match current {
        None | Some(FocusTarget::SeeMore) => first.or(after_last),
        Some(FocusTarget::Thumbnail(index)) => {
            match revealed.iter().position(|&revealed| revealed == index) {
                Some(pos) if pos + 1 < revealed.len() => {
                    Some(FocusTarget::Thumbnail(revealed[pos + 1]))
                }
                _ => after_last,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_key_maps_navigation_keys() {
        assert_eq!(modal_key(&Key::Named(Named::Escape)), ModalKey::Escape);
        assert_eq!(modal_key(&Key::Named(Named::ArrowLeft)), ModalKey::ArrowLeft);
        assert_eq!(modal_key(&Key::Named(Named::ArrowRight)), ModalKey::ArrowRight);
        assert_eq!(
            modal_key(&Key::Character("F".into())),
            ModalKey::Character("F".to_string())
        );
        assert_eq!(modal_key(&Key::Named(Named::Home)), ModalKey::Other);
    }

    #[test]
    fn wheel_up_zooms_in_and_down_zooms_out() {
        let up = wheel_factor(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 });
        let down = wheel_factor(mouse::ScrollDelta::Pixels { x: 0.0, y: -12.0 });
        assert_eq!(up, Some(WHEEL_ZOOM_FACTOR));
        assert_eq!(down, Some(1.0 / WHEEL_ZOOM_FACTOR));
        assert_eq!(wheel_factor(mouse::ScrollDelta::Lines { x: 3.0, y: 0.0 }), None);
    }

    #[test]
    fn touch_positions_become_media_relative() {
        let origin = layout::media_origin();
        let input = pointer_input(
            touch::Event::FingerPressed {
                id: touch::Finger(7),
                position: iced::Point::new(origin.x + 10.0, origin.y + 20.0),
            },
            Instant::now(),
        );
        match input {
            PointerInput::Pressed { id, position, .. } => {
                assert_eq!(id, 7);
                assert_eq!(position, Point::new(10.0, 20.0));
            }
            other => panic!("unexpected input {other:?}"),
        }
    }

    #[test]
    fn tab_cycles_thumbnails_then_see_more() {
        let revealed = [0, 1, 8];
        let mut focus = next_focus(None, &revealed, true);
        assert_eq!(focus, Some(FocusTarget::Thumbnail(0)));
        focus = next_focus(focus, &revealed, true);
        focus = next_focus(focus, &revealed, true);
        assert_eq!(focus, Some(FocusTarget::Thumbnail(8)));
        focus = next_focus(focus, &revealed, true);
        assert_eq!(focus, Some(FocusTarget::SeeMore));
        assert_eq!(
            next_focus(focus, &revealed, true),
            Some(FocusTarget::Thumbnail(0))
        );
    }

    #[test]
    fn tab_wraps_without_see_more() {
        let revealed = [0, 1];
        assert_eq!(
            next_focus(Some(FocusTarget::Thumbnail(1)), &revealed, false),
            Some(FocusTarget::Thumbnail(0))
        );
        assert_eq!(next_focus(None, &[], false), None);
    }
}
