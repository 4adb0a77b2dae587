// SPDX-License-Identifier: MPL-2.0
//! Render state for the gallery page.
//!
//! [`ModalSurface`] is the iced side of the [`ModalView`] port: the
//! controller calls into it, and `view` reads it back when drawing. Window
//! mode changes cannot be applied from here, so they are queued as
//! [`WindowCommand`]s for the app to turn into tasks.

use crate::application::port::{MediaDisplay, ModalView};
use crate::application::share::ShareLinks;
use crate::domain::media::MediaItem;
use crate::domain::ui::{Vector, ZoomScale};

/// Window change requested by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Fullscreen(bool),
    Maximize(bool),
}

/// Elements that can hold keyboard focus on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Thumbnail(usize),
    SeeMore,
}

/// The item currently shown in the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedMedia {
    pub item: MediaItem,
    pub index: usize,
    pub counter: String,
    pub share: ShareLinks,
}

#[derive(Debug, Default)]
pub struct ModalSurface {
    modal_visible: bool,
    scroll_locked: bool,
    focus: Option<FocusTarget>,
    remembered_focus: Option<FocusTarget>,
    displayed: Option<DisplayedMedia>,
    highlighted: Option<usize>,
    video_paused: bool,
    fullscreen: bool,
    maximized: bool,
    scale: ZoomScale,
    offset: Vector,
    /// Global indices of rendered thumbnails, sorted, which is grid order.
    revealed: Vec<usize>,
    see_more_visible: bool,
    window_commands: Vec<WindowCommand>,
}

impl ModalSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Moves keyboard focus, e.g. when a thumbnail is activated.
    pub fn set_focus(&mut self, target: Option<FocusTarget>) {
        self.focus = target;
    }

    #[must_use]
    pub fn displayed(&self) -> Option<&DisplayedMedia> {
        self.displayed.as_ref()
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn is_video_paused(&self) -> bool {
        self.video_paused
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    #[must_use]
    pub fn transform(&self) -> (ZoomScale, Vector) {
        (self.scale, self.offset)
    }

    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    #[must_use]
    pub fn is_see_more_visible(&self) -> bool {
        self.see_more_visible
    }

    /// Takes the window commands queued since the last call.
    pub fn drain_window_commands(&mut self) -> Vec<WindowCommand> {
        std::mem::take(&mut self.window_commands)
    }

    /// Forgets the grid, e.g. before the items are replaced.
    pub fn clear_grid(&mut self) {
        self.revealed.clear();
        self.highlighted = None;
        self.see_more_visible = false;
    }
}

impl ModalView for ModalSurface {
    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
        if !visible {
            self.displayed = None;
        }
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn remember_focus(&mut self) {
        self.remembered_focus = self.focus;
    }

    fn restore_focus(&mut self) {
        self.focus = self.remembered_focus.take();
    }

    fn show_media(&mut self, display: MediaDisplay<'_>) {
        self.video_paused = false;
        self.displayed = Some(DisplayedMedia {
            item: display.item.clone(),
            index: display.index,
            counter: display.counter,
            share: display.share,
        });
    }

    fn highlight_thumbnail(&mut self, visible_position: Option<usize>) {
        self.highlighted = visible_position;
    }

    fn pause_video(&mut self) {
        self.video_paused = true;
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            self.fullscreen = fullscreen;
            self.window_commands.push(WindowCommand::Fullscreen(fullscreen));
        }
    }

    fn set_maximized(&mut self, maximized: bool) {
        if self.maximized != maximized {
            self.maximized = maximized;
            self.window_commands.push(WindowCommand::Maximize(maximized));
        }
    }

    fn apply_transform(&mut self, scale: ZoomScale, offset: Vector) {
        self.scale = scale;
        self.offset = offset;
    }

    fn reveal_thumbnails(&mut self, indices: &[usize]) {
        for &index in indices {
            if let Err(slot) = self.revealed.binary_search(&index) {
                self.revealed.insert(slot, index);
            }
        }
    }

    fn set_see_more_visible(&mut self, visible: bool) {
        self.see_more_visible = visible;
    }
}
