// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;

/// Represents the two kinds of gallery media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still photo rendered in the modal image element.
    Image,
    /// Clip rendered in the modal video element.
    Video,
}

impl MediaKind {
    /// Returns the manifest discriminant for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the full-size media lives.
///
/// Only the source matching the kind is stored, so an image can never carry
/// a stray video URL and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaContent {
    Image { src: String },
    Video { video_src: String },
}

/// One entry of the gallery, created at manifest load time and read-only
/// for the rest of the session.
///
/// # Example
///
/// ```
/// use birthday_gallery::domain::media::{MediaItem, MediaKind};
///
/// let item = MediaItem::image("images/cake.jpg", "thumbs/cake.jpg", "The cake");
/// assert_eq!(item.kind(), MediaKind::Image);
/// assert_eq!(item.source(), "images/cake.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    content: MediaContent,
    thumb: String,
    alt: String,
}

impl MediaItem {
    /// Creates an image item.
    pub fn image(
        src: impl Into<String>,
        thumb: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            content: MediaContent::Image { src: src.into() },
            thumb: thumb.into(),
            alt: alt.into(),
        }
    }

    /// Creates a video item.
    pub fn video(
        video_src: impl Into<String>,
        thumb: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            content: MediaContent::Video {
                video_src: video_src.into(),
            },
            thumb: thumb.into(),
            alt: alt.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        match self.content {
            MediaContent::Image { .. } => MediaKind::Image,
            MediaContent::Video { .. } => MediaKind::Video,
        }
    }

    /// Returns the full-size source (`src` for images, `videoSrc` for videos).
    #[must_use]
    pub fn source(&self) -> &str {
        match &self.content {
            MediaContent::Image { src } => src,
            MediaContent::Video { video_src } => video_src,
        }
    }

    #[must_use]
    pub fn content(&self) -> &MediaContent {
        &self.content
    }

    #[must_use]
    pub fn thumb(&self) -> &str {
        &self.thumb
    }

    /// Caption shown under the modal and used as share text.
    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind() == MediaKind::Image
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind() == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_exposes_src_as_source() {
        let item = MediaItem::image("a.jpg", "t/a.jpg", "A");
        assert_eq!(item.kind(), MediaKind::Image);
        assert_eq!(item.source(), "a.jpg");
        assert_eq!(item.thumb(), "t/a.jpg");
        assert_eq!(item.alt(), "A");
        assert!(item.is_image());
    }

    #[test]
    fn video_exposes_video_src_as_source() {
        let item = MediaItem::video("clip.mp4", "t/clip.jpg", "Clip");
        assert_eq!(item.kind(), MediaKind::Video);
        assert_eq!(item.source(), "clip.mp4");
        assert!(matches!(
            item.content(),
            MediaContent::Video { video_src } if video_src == "clip.mp4"
        ));
    }

    #[test]
    fn kind_display_matches_manifest_discriminant() {
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Video.to_string(), "video");
    }
}
