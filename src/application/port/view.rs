// SPDX-License-Identifier: MPL-2.0
//! Presentation port for the modal viewer.
//!
//! The gallery controller never touches widgets. It describes what the
//! screen should show through [`ModalView`], and the iced surface (or a
//! recording fake in tests) carries it out.

use crate::application::share::ShareLinks;
use crate::domain::media::MediaItem;
use crate::domain::ui::{Vector, ZoomScale};

/// Everything needed to render the current modal item.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDisplay<'a> {
    pub item: &'a MediaItem,
    /// Global index of the item in the gallery.
    pub index: usize,
    /// Human counter such as `"2/7"`.
    pub counter: String,
    pub share: ShareLinks,
}

/// Port for the modal's visual side effects.
pub trait ModalView {
    /// Shows or hides the modal overlay.
    fn set_modal_visible(&mut self, visible: bool);

    /// Stops the page behind the modal from scrolling.
    fn set_page_scroll_locked(&mut self, locked: bool);

    /// Remembers which element had focus before the modal opened.
    fn remember_focus(&mut self);

    /// Gives focus back to the element remembered by [`Self::remember_focus`].
    fn restore_focus(&mut self);

    /// Displays an item. Image or video presentation is chosen from its kind.
    fn show_media(&mut self, display: MediaDisplay<'_>);

    /// Highlights the thumbnail at a visible position, or clears the highlight.
    fn highlight_thumbnail(&mut self, visible_position: Option<usize>);

    /// Pauses the video if one is playing.
    fn pause_video(&mut self);

    fn set_fullscreen(&mut self, fullscreen: bool);

    fn set_maximized(&mut self, maximized: bool);

    /// Applies the zoom transform to the displayed image.
    fn apply_transform(&mut self, scale: ZoomScale, offset: Vector);

    /// Adds the given global indices to the rendered thumbnail grid.
    fn reveal_thumbnails(&mut self, indices: &[usize]);

    fn set_see_more_visible(&mut self, visible: bool);
}
