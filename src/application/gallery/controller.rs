// SPDX-License-Identifier: MPL-2.0
//! Gallery modal controller.
//!
//! Owns the ordered media list and the modal state machine:
//!
//! ```text
//! Closed --open(i)--> Open(i) --navigate(d)--> Open((i + d) mod len)
//!   ^                   |
//!   +------close()------+
//! ```
//!
//! Every visible effect goes through the [`ModalView`] port. Gestures come in
//! through the optional [`GestureCapability`], so a controller built with
//! [`NoGestures`] behaves identically for keyboard and mouse users.

use super::disclosure::Disclosure;
use super::keyboard::{KeyAction, ModalKey};
use crate::application::port::{
    Gesture, GestureCapability, MediaDisplay, ModalView, NoGestures, PointerInput, ShareLauncher,
};
use crate::application::share::{ShareHelper, SharePlatform, ShareOutcome};
use crate::config::defaults::{
    DEFAULT_INITIAL_VISIBLE, DEFAULT_PAGE_URL, DEFAULT_REVEAL_BATCH, DEFAULT_SHARE_TEXT,
    DEFAULT_ZOOM_SCALE,
};
use crate::config::Config;
use crate::domain::media::MediaItem;
use crate::domain::ui::{Point, Size, Vector, ZoomScale};
use crate::ui::state::ZoomPanState;
use std::time::Instant;

/// Whether the modal is showing, and which item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl ModalState {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

/// Settings the controller needs from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySettings {
    pub initial_visible: usize,
    pub reveal_batch: usize,
    pub keep_last_visible: bool,
    pub click_scale: ZoomScale,
    pub page_url: String,
    pub share_text: String,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            reveal_batch: DEFAULT_REVEAL_BATCH,
            keep_last_visible: true,
            click_scale: ZoomScale::new(DEFAULT_ZOOM_SCALE),
            page_url: DEFAULT_PAGE_URL.to_string(),
            share_text: DEFAULT_SHARE_TEXT.to_string(),
        }
    }
}

impl GallerySettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            initial_visible: config.gallery.initial_visible(),
            reveal_batch: config.gallery.reveal_batch(),
            keep_last_visible: config.gallery.keep_last_visible.unwrap_or(true),
            click_scale: ZoomScale::new(config.zoom.click_scale()),
            page_url: config
                .gallery
                .page_url
                .clone()
                .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string()),
            share_text: config
                .share
                .share_text
                .clone()
                .unwrap_or_else(|| DEFAULT_SHARE_TEXT.to_string()),
        }
    }
}

/// Observable state of the gallery.
#[derive(Debug, Clone)]
pub struct GalleryState {
    items: Vec<MediaItem>,
    current_index: usize,
    modal: ModalState,
    zoom: ZoomPanState,
    is_fullscreen: bool,
    is_maximized: bool,
}

impl GalleryState {
    fn new(items: Vec<MediaItem>, click_scale: ZoomScale) -> Self {
        Self {
            items,
            current_index: 0,
            modal: ModalState::Closed,
            zoom: ZoomPanState::new(click_scale),
            is_fullscreen: false,
            is_maximized: false,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.items.get(self.current_index)
    }

    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomPanState {
        &self.zoom
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.is_maximized
    }

    /// Counter text such as `"3/12"`, `None` for an empty gallery.
    #[must_use]
    pub fn counter(&self) -> Option<String> {
        if self.items.is_empty() {
            None
        } else {
            Some(format!("{}/{}", self.current_index + 1, self.items.len()))
        }
    }
}

/// Drives the modal viewer over a [`ModalView`].
pub struct GalleryController<V, G = NoGestures> {
    state: GalleryState,
    disclosure: Disclosure,
    share: ShareHelper,
    settings: GallerySettings,
    view: V,
    gestures: G,
}

impl<V: ModalView> GalleryController<V, NoGestures> {
    /// Creates a controller without touch gesture support.
    pub fn new(items: Vec<MediaItem>, settings: GallerySettings, view: V) -> Self {
        Self::with_gestures(items, settings, view, NoGestures)
    }
}

impl<V: ModalView, G: GestureCapability> GalleryController<V, G> {
    /// Creates a controller and renders the initial thumbnail grid.
    pub fn with_gestures(items: Vec<MediaItem>, settings: GallerySettings, view: V, gestures: G) -> Self {
        let disclosure = Disclosure::new(
            items.len(),
            settings.initial_visible,
            settings.reveal_batch,
            settings.keep_last_visible,
        );
        let mut controller = Self {
            state: GalleryState::new(items, settings.click_scale),
            disclosure,
            share: ShareHelper::new(settings.page_url.clone(), settings.share_text.clone()),
            settings,
            view,
            gestures,
        };
        controller.render_grid();
        controller
    }

    fn render_grid(&mut self) {
        let visible = self.disclosure.visible_indices();
        self.view.reveal_thumbnails(&visible);
        self.view.set_see_more_visible(!self.disclosure.is_complete());
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    #[must_use]
    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    #[must_use]
    pub fn share_helper(&self) -> &ShareHelper {
        &self.share
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn gestures_available(&self) -> bool {
        self.gestures.is_available()
    }

    /// Replaces the gallery contents, closing the modal first.
    pub fn set_items(&mut self, items: Vec<MediaItem>) {
        self.close();
        self.disclosure = Disclosure::new(
            items.len(),
            self.settings.initial_visible,
            self.settings.reveal_batch,
            self.settings.keep_last_visible,
        );
        self.state.items = items;
        self.state.current_index = 0;
        self.render_grid();
    }

    /// Opens the modal on `index`, clamped into range.
    ///
    /// Returns `false` (and does nothing) when the gallery is empty.
    pub fn open(&mut self, index: usize) -> bool {
        if self.state.items.is_empty() {
            return false;
        }
        let index = index.min(self.state.items.len() - 1);

        if self.state.is_open() {
            self.pause_current_video();
        } else {
            self.view.remember_focus();
            self.view.set_page_scroll_locked(true);
            self.view.set_modal_visible(true);
        }

        self.state.current_index = index;
        self.state.modal = ModalState::Open { index };
        self.state.zoom.reset_zoom();
        self.display_current();
        true
    }

    /// Closes the modal. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.pause_current_video();
        if self.state.is_fullscreen {
            self.state.is_fullscreen = false;
            self.view.set_fullscreen(false);
        }
        if self.state.is_maximized {
            self.state.is_maximized = false;
            self.view.set_maximized(false);
        }
        self.state.zoom.reset_zoom();
        self.state.modal = ModalState::Closed;
        self.share.reset();
        // Lifts of fingers still down are never fed while closed.
        self.gestures.detach();

        self.view.set_modal_visible(false);
        self.view.set_page_scroll_locked(false);
        self.view.highlight_thumbnail(None);
        self.view.restore_focus();
        true
    }

    /// Moves by `direction` items, wrapping around both ends.
    ///
    /// Ignored while the modal is closed.
    pub fn navigate(&mut self, direction: isize) -> bool {
        let ModalState::Open { index } = self.state.modal else {
            return false;
        };
        let len = self.state.items.len() as isize;
        if len == 0 {
            return false;
        }
        let target = (index as isize + direction).rem_euclid(len) as usize;

        self.pause_current_video();
        self.state.zoom.reset_zoom();
        self.state.current_index = target;
        self.state.modal = ModalState::Open { index: target };
        self.display_current();
        true
    }

    pub fn next(&mut self) -> bool {
        self.navigate(1)
    }

    pub fn previous(&mut self) -> bool {
        self.navigate(-1)
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.state.is_fullscreen = !self.state.is_fullscreen;
        self.view.set_fullscreen(self.state.is_fullscreen);
        true
    }

    pub fn toggle_maximize(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.state.is_maximized = !self.state.is_maximized;
        self.view.set_maximized(self.state.is_maximized);
        true
    }

    /// Applies the keyboard contract. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &ModalKey) -> bool {
        if !self.state.is_open() {
            return false;
        }
        match key.action() {
            Some(KeyAction::Close) => self.close(),
            Some(KeyAction::Previous) => self.navigate(-1),
            Some(KeyAction::Next) => self.navigate(1),
            Some(KeyAction::ToggleFullscreen) => self.toggle_fullscreen(),
            None => false,
        }
    }

    /// Feeds raw pointer input through the gesture capability.
    pub fn handle_pointer(&mut self, input: PointerInput, now: Instant) -> bool {
        if !self.state.is_open() {
            return false;
        }
        match self.gestures.feed(input) {
            Some(gesture) => self.handle_gesture(gesture, now),
            None => false,
        }
    }

    /// Applies the gesture contract. Returns whether anything changed.
    pub fn handle_gesture(&mut self, gesture: Gesture, now: Instant) -> bool {
        if !self.state.is_open() {
            return false;
        }
        let zoomed = self.state.zoom.is_zoomed();
        match gesture {
            Gesture::SwipeLeft if !zoomed => self.navigate(1),
            Gesture::SwipeRight if !zoomed => self.navigate(-1),
            Gesture::SwipeUp | Gesture::SwipeDown if !zoomed => self.close(),
            Gesture::SwipeLeft | Gesture::SwipeRight | Gesture::SwipeUp | Gesture::SwipeDown => {
                false
            }
            Gesture::DoubleTap(_) => self.toggle_fullscreen(),
            Gesture::Dragged(delta) => self.pan(delta),
            Gesture::PinchStarted => {
                self.state.zoom.pinch_start();
                true
            }
            Gesture::Pinched { scale, center } => {
                self.state.zoom.pinch_update(scale, center);
                self.push_transform();
                true
            }
            Gesture::PinchEnded => {
                self.state.zoom.pinch_end(now);
                true
            }
        }
    }

    /// Reveals the next batch of thumbnails and returns their indices.
    pub fn reveal_more(&mut self) -> Vec<usize> {
        let revealed = self.disclosure.reveal_more();
        if !revealed.is_empty() {
            self.view.reveal_thumbnails(&revealed);
        }
        self.view.set_see_more_visible(!self.disclosure.is_complete());
        if self.state.is_open() {
            let position = self.disclosure.visible_position(self.state.current_index);
            self.view.highlight_thumbnail(position);
        }
        revealed
    }

    // ---------------------------------------------------------------------
    // Zoom
    // ---------------------------------------------------------------------

    /// Records the display area and the unscaled image size.
    pub fn set_zoom_bounds(&mut self, container: Size, content: Size) {
        self.state.zoom.set_bounds(container, content);
    }

    /// Click on the image: zoom in at `pointer` or reset.
    pub fn toggle_zoom_at(&mut self, pointer: Point) -> bool {
        if !self.is_showing_image() {
            return false;
        }
        self.state.zoom.toggle_zoom_at(pointer);
        self.push_transform();
        true
    }

    /// Mouse wheel zoom.
    pub fn zoom_by(&mut self, factor: f32, pointer: Point) -> bool {
        if !self.is_showing_image() {
            return false;
        }
        self.state.zoom.zoom_by(factor, pointer);
        self.push_transform();
        true
    }

    pub fn pan(&mut self, delta: Vector) -> bool {
        if self.state.zoom.pan(delta) {
            self.push_transform();
            true
        } else {
            false
        }
    }

    pub fn pan_to(&mut self, offset: Vector) -> bool {
        if self.state.zoom.pan_to(offset) {
            self.push_transform();
            true
        } else {
            false
        }
    }

    pub fn reset_zoom(&mut self) {
        self.state.zoom.reset_zoom();
        self.push_transform();
    }

    /// Advances timers (pinch settle). Returns whether the view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state.zoom.tick(now) {
            self.push_transform();
            true
        } else {
            false
        }
    }

    // ---------------------------------------------------------------------
    // Share
    // ---------------------------------------------------------------------

    pub fn share(&self, platform: SharePlatform, launcher: &mut impl ShareLauncher) -> ShareOutcome {
        self.share.share(platform, launcher)
    }

    /// Detaches gestures and closes the modal.
    pub fn teardown(&mut self) {
        if !self.close() {
            self.gestures.detach();
        }
    }

    fn is_showing_image(&self) -> bool {
        self.state.is_open() && self.state.current_item().is_some_and(MediaItem::is_image)
    }

    fn pause_current_video(&mut self) {
        if self.state.current_item().is_some_and(MediaItem::is_video) {
            self.view.pause_video();
        }
    }

    fn push_transform(&mut self) {
        let zoom = &self.state.zoom;
        self.view.apply_transform(zoom.scale(), zoom.offset());
    }

    fn display_current(&mut self) {
        let index = self.state.current_index;
        let Some(item) = self.state.items.get(index) else {
            return;
        };
        let share = self.share.update_for(item);
        self.view.show_media(MediaDisplay {
            item,
            index,
            counter: format!("{}/{}", index + 1, self.state.items.len()),
            share,
        });
        self.view
            .highlight_thumbnail(self.disclosure.visible_position(index));
        let zoom = &self.state.zoom;
        self.view.apply_transform(zoom.scale(), zoom.offset());
    }
}

impl<V: std::fmt::Debug, G> std::fmt::Debug for GalleryController<V, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryController")
            .field("state", &self.state)
            .field("disclosure", &self.disclosure)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::share::ShareLinks;
    use crate::ui::state::TouchGestures;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct RecordingView {
        modal_visible: bool,
        scroll_locked: bool,
        focus_remembered: usize,
        focus_restored: usize,
        shown: Vec<(usize, String)>,
        share: Option<ShareLinks>,
        highlighted: Option<usize>,
        pauses: usize,
        fullscreen: bool,
        maximized: bool,
        transform: Option<(ZoomScale, Vector)>,
        revealed: Vec<usize>,
        see_more: bool,
    }

    impl ModalView for RecordingView {
        fn set_modal_visible(&mut self, visible: bool) {
            self.modal_visible = visible;
        }
        fn set_page_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }
        fn remember_focus(&mut self) {
            self.focus_remembered += 1;
        }
        fn restore_focus(&mut self) {
            self.focus_restored += 1;
        }
        fn show_media(&mut self, display: MediaDisplay<'_>) {
            self.shown.push((display.index, display.counter));
            self.share = Some(display.share);
        }
        fn highlight_thumbnail(&mut self, visible_position: Option<usize>) {
            self.highlighted = visible_position;
        }
        fn pause_video(&mut self) {
            self.pauses += 1;
        }
        fn set_fullscreen(&mut self, fullscreen: bool) {
            self.fullscreen = fullscreen;
        }
        fn set_maximized(&mut self, maximized: bool) {
            self.maximized = maximized;
        }
        fn apply_transform(&mut self, scale: ZoomScale, offset: Vector) {
            self.transform = Some((scale, offset));
        }
        fn reveal_thumbnails(&mut self, indices: &[usize]) {
            self.revealed.extend_from_slice(indices);
        }
        fn set_see_more_visible(&mut self, visible: bool) {
            self.see_more = visible;
        }
    }

    fn images(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| MediaItem::image(format!("img/{i}.jpg"), format!("thumbs/{i}.jpg"), format!("Photo {i}")))
            .collect()
    }

    fn controller(count: usize) -> GalleryController<RecordingView> {
        GalleryController::new(images(count), GallerySettings::default(), RecordingView::default())
    }

    #[test]
    fn open_on_empty_gallery_is_a_no_op() {
        let mut gallery = controller(0);
        assert!(!gallery.open(0));
        assert!(!gallery.state().is_open());
        assert!(!gallery.view().scroll_locked);
    }

    #[test]
    fn open_locks_scroll_and_shows_item() {
        let mut gallery = controller(3);
        assert!(gallery.open(1));
        let view = gallery.view();
        assert!(view.modal_visible);
        assert!(view.scroll_locked);
        assert_eq!(view.focus_remembered, 1);
        assert_eq!(view.shown, vec![(1, "2/3".to_string())]);
        assert_eq!(view.highlighted, Some(1));
    }

    #[test]
    fn open_clamps_out_of_range_index() {
        let mut gallery = controller(3);
        gallery.open(42);
        assert_eq!(gallery.state().current_index(), 2);
        assert_eq!(gallery.state().counter().as_deref(), Some("3/3"));
    }

    #[test]
    fn reopening_while_open_does_not_relock() {
        let mut gallery = controller(3);
        gallery.open(0);
        gallery.open(2);
        assert_eq!(gallery.view().focus_remembered, 1);
        assert_eq!(gallery.state().modal(), ModalState::Open { index: 2 });
    }

    #[test]
    fn close_restores_page_state() {
        let mut gallery = controller(3);
        gallery.open(0);
        gallery.toggle_fullscreen();
        gallery.toggle_maximize();
        assert!(gallery.close());

        let view = gallery.view();
        assert!(!view.modal_visible);
        assert!(!view.scroll_locked);
        assert!(!view.fullscreen);
        assert!(!view.maximized);
        assert_eq!(view.focus_restored, 1);
        assert!(!gallery.close(), "second close is a no-op");
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut gallery = controller(3);
        gallery.open(0);
        gallery.navigate(-1);
        assert_eq!(gallery.state().current_index(), 2);
        gallery.navigate(1);
        assert_eq!(gallery.state().current_index(), 0);
        gallery.navigate(7);
        assert_eq!(gallery.state().current_index(), 1);
    }

    #[test]
    fn navigate_ignored_while_closed() {
        let mut gallery = controller(3);
        assert!(!gallery.navigate(1));
        assert_eq!(gallery.state().current_index(), 0);
    }

    #[test]
    fn navigating_away_from_video_pauses_it() {
        let items = vec![
            MediaItem::video("a.mp4", "a.jpg", "A"),
            MediaItem::image("b.jpg", "b_t.jpg", "B"),
        ];
        let mut gallery = GalleryController::new(items, GallerySettings::default(), RecordingView::default());
        gallery.open(0);
        gallery.next();
        assert_eq!(gallery.view().pauses, 1);
        gallery.next();
        gallery.close();
        assert_eq!(gallery.view().pauses, 2);
    }

    #[test]
    fn keyboard_only_acts_while_open() {
        let mut gallery = controller(3);
        assert!(!gallery.handle_key(&ModalKey::ArrowRight));

        gallery.open(0);
        assert!(gallery.handle_key(&ModalKey::ArrowRight));
        assert_eq!(gallery.state().current_index(), 1);
        assert!(gallery.handle_key(&ModalKey::ArrowLeft));
        assert_eq!(gallery.state().current_index(), 0);
        assert!(gallery.handle_key(&ModalKey::Character("f".into())));
        assert!(gallery.state().is_fullscreen());
        assert!(!gallery.handle_key(&ModalKey::Character("x".into())));
        assert!(gallery.handle_key(&ModalKey::Escape));
        assert!(!gallery.state().is_open());
    }

    #[test]
    fn open_resets_zoom() {
        let mut gallery = controller(3);
        gallery.set_zoom_bounds(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
        gallery.open(0);
        gallery.toggle_zoom_at(Point::new(80.0, 20.0));
        assert!(gallery.state().zoom().is_zoomed());
        gallery.close();
        gallery.open(0);
        assert!(!gallery.state().zoom().is_zoomed());
        assert_eq!(gallery.view().transform, Some((ZoomScale::ONE, Vector::ZERO)));
    }

    #[test]
    fn swipes_navigate_and_close() {
        let mut gallery = controller(3);
        let now = Instant::now();
        gallery.open(0);
        assert!(gallery.handle_gesture(Gesture::SwipeLeft, now));
        assert_eq!(gallery.state().current_index(), 1);
        assert!(gallery.handle_gesture(Gesture::SwipeRight, now));
        assert_eq!(gallery.state().current_index(), 0);
        assert!(gallery.handle_gesture(Gesture::SwipeDown, now));
        assert!(!gallery.state().is_open());
    }

    #[test]
    fn swipes_are_ignored_while_zoomed() {
        let mut gallery = controller(3);
        let now = Instant::now();
        gallery.set_zoom_bounds(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
        gallery.open(0);
        gallery.toggle_zoom_at(Point::new(50.0, 50.0));
        assert!(!gallery.handle_gesture(Gesture::SwipeLeft, now));
        assert_eq!(gallery.state().current_index(), 0);
        assert!(gallery.handle_gesture(Gesture::Dragged(Vector::new(10.0, 0.0)), now));
    }

    #[test]
    fn pinch_gesture_drives_zoom_and_settles() {
        let mut gallery = controller(3);
        let now = Instant::now();
        gallery.set_zoom_bounds(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
        gallery.open(0);
        gallery.handle_gesture(Gesture::PinchStarted, now);
        gallery.handle_gesture(
            Gesture::Pinched {
                scale: 1.02,
                center: Point::new(50.0, 50.0),
            },
            now,
        );
        gallery.handle_gesture(Gesture::PinchEnded, now);
        assert!(gallery.state().zoom().is_zoomed());
        assert!(gallery.tick(now + Duration::from_secs(1)));
        assert!(!gallery.state().zoom().is_zoomed());
    }

    #[test]
    fn touch_input_flows_through_recognizer() {
        let mut gallery = GalleryController::with_gestures(
            images(3),
            GallerySettings::default(),
            RecordingView::default(),
            TouchGestures::new(),
        );
        assert!(gallery.gestures_available());
        let t = Instant::now();
        gallery.open(0);
        gallery.handle_pointer(
            PointerInput::Pressed {
                id: 7,
                position: Point::new(300.0, 200.0),
                at: t,
            },
            t,
        );
        let changed = gallery.handle_pointer(
            PointerInput::Released {
                id: 7,
                position: Point::new(100.0, 200.0),
                at: t + Duration::from_millis(150),
            },
            t,
        );
        assert!(changed);
        assert_eq!(gallery.state().current_index(), 1);
    }

    #[test]
    fn swipe_works_after_closing_with_finger_down() {
        let mut gallery = GalleryController::with_gestures(
            images(3),
            GallerySettings::default(),
            RecordingView::default(),
            TouchGestures::new(),
        );
        let t = Instant::now();
        gallery.open(0);
        gallery.handle_pointer(
            PointerInput::Pressed {
                id: 1,
                position: Point::new(200.0, 200.0),
                at: t,
            },
            t,
        );
        gallery.handle_key(&ModalKey::Escape);
        // The lift arrives while the modal is closed and is dropped.
        gallery.handle_pointer(
            PointerInput::Released {
                id: 1,
                position: Point::new(200.0, 200.0),
                at: t,
            },
            t,
        );

        gallery.open(0);
        let later = t + Duration::from_secs(1);
        gallery.handle_pointer(
            PointerInput::Pressed {
                id: 2,
                position: Point::new(300.0, 200.0),
                at: later,
            },
            later,
        );
        let changed = gallery.handle_pointer(
            PointerInput::Released {
                id: 2,
                position: Point::new(100.0, 200.0),
                at: later + Duration::from_millis(150),
            },
            later,
        );
        assert!(changed);
        assert_eq!(gallery.state().current_index(), 1);
    }

    #[test]
    fn click_scale_of_one_still_zooms() {
        let mut config = Config::default();
        config.zoom.click_scale = Some(1.0);
        let mut gallery = GalleryController::new(
            images(3),
            GallerySettings::from_config(&config),
            RecordingView::default(),
        );
        gallery.set_zoom_bounds(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
        gallery.open(0);
        gallery.toggle_zoom_at(Point::new(50.0, 50.0));
        assert!(gallery.state().zoom().is_zoomed());
        assert!(gallery.state().zoom().scale().value() > 1.0);
    }

    #[test]
    fn see_more_hides_when_complete() {
        let mut gallery = controller(12);
        assert!(gallery.view().see_more);
        assert_eq!(gallery.view().revealed.len(), 10);
        gallery.reveal_more();
        assert!(!gallery.view().see_more);
        assert_eq!(gallery.view().revealed.len(), 12);
    }

    #[test]
    fn hidden_thumbnail_clears_highlight() {
        let mut gallery = controller(20);
        gallery.open(12);
        assert_eq!(gallery.view().highlighted, None);
        gallery.reveal_more();
        assert_eq!(gallery.view().highlighted, Some(12));
    }

    #[test]
    fn share_links_follow_displayed_item() {
        let mut gallery = controller(2);
        gallery.open(1);
        let links = gallery.view().share.clone().expect("links shown");
        let pin = links
            .url_for(SharePlatform::Pinterest)
            .expect("image has pinterest link");
        assert!(pin.contains("1.jpg"));
    }

    #[test]
    fn teardown_closes_modal() {
        let mut gallery = controller(2);
        gallery.open(0);
        gallery.teardown();
        assert!(!gallery.state().is_open());
        assert!(!gallery.view().scroll_locked);
    }

    #[test]
    fn set_items_resets_grid() {
        let mut gallery = controller(0);
        assert!(!gallery.view().see_more);
        gallery.set_items(images(30));
        assert!(gallery.view().see_more);
        assert!(gallery.open(29));
        assert_eq!(gallery.view().highlighted, Some(9));
    }
}
