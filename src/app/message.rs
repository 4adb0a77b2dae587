// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::paths::AppPaths;
use crate::application::share::SharePlatform;
use crate::domain::media::MediaItem;
use crate::domain::ui::{Point, Rect};
use crate::error::LoadError;
use crate::media::ImageData;
use crate::ui::notifications;
use iced::{mouse, window};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Manifest load finished. Results from an older request are ignored.
    GalleryLoaded {
        generation: u64,
        items: Vec<MediaItem>,
        error: Option<LoadError>,
    },
    /// Reload the manifest (after a failure or a manifest change).
    ReloadGallery,
    /// An image (thumbnail or full size) finished loading.
    ImageLoaded {
        source: String,
        result: Result<ImageData, LoadError>,
    },
    ThumbnailPressed(usize),
    SeeMore,
    Modal(ModalMessage),
    /// A share button was pressed; `anchor` is its bounds for the tooltip.
    Share {
        platform: SharePlatform,
        anchor: Rect,
    },
    PlayVideo,
    PassphraseChanged(String),
    PassphraseSubmitted,
    Lock,
    PromptAccepted,
    PromptDismissed,
    Notification(notifications::NotificationMessage),
    /// Native events routed from the subscription.
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
    Tick(Instant),
}

/// Messages from the modal viewer's own widgets.
#[derive(Debug, Clone)]
pub enum ModalMessage {
    Close,
    Previous,
    Next,
    ToggleFullscreen,
    ToggleMaximize,
    /// Cursor position over the media area, relative to its top-left.
    CursorMoved(Point),
    CursorLeft,
    MediaPressed,
    MediaReleased,
    MediaDoubleClicked,
    MediaScrolled(mouse::ScrollDelta),
}

/// Runtime flags passed from `main` into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 format (e.g., `en-US`, `fr`).
    pub lang: Option<String>,
    /// Directory overrides from `--data-dir` and `--config-dir`.
    pub paths: AppPaths,
    /// Manifest path or URL from `--manifest`.
    pub manifest: Option<String>,
}
