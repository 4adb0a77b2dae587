// SPDX-License-Identifier: MPL-2.0
//! Gallery media loading.
//!
//! This module turns the JSON manifest into [`MediaItem`](crate::domain::media::MediaItem)s:
//!
//! - [`manifest`]: Wire format of `gallery-data.json`
//! - [`resolver`]: Resolution of manifest-relative paths
//! - [`loader`]: Page-level boundary that never lets a load error escape
//! - [`image`]: Image bytes to iced handles, with their dimensions

pub mod image;
pub mod loader;
pub mod manifest;
pub mod resolver;

// Re-export commonly used types
pub use extensions::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
pub use image::{load_image, ImageData};
pub use loader::{load_gallery, load_gallery_items};
pub use manifest::{parse_manifest, Manifest, ManifestEntry};
pub use resolver::{MediaResolver, MediaSource};

use crate::domain::media::MediaKind;
use std::path::Path;

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "avif"];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv"];
}

/// Detects the media kind of a file from its extension.
///
/// Returns `None` for files the gallery does not display.
pub fn detect_media_kind<P: AsRef<Path>>(path: P) -> Option<MediaKind> {
    let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_kinds_case_insensitively() {
        assert_eq!(detect_media_kind("cake.JPG"), Some(MediaKind::Image));
        assert_eq!(detect_media_kind("party/song.mp4"), Some(MediaKind::Video));
        assert_eq!(detect_media_kind("notes.txt"), None);
        assert_eq!(detect_media_kind("no_extension"), None);
    }
}
