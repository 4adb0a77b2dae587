// SPDX-License-Identifier: MPL-2.0
//! Wire format of the gallery manifest.
//!
//! ```json
//! { "media": [
//!     { "src": "images/cake.jpg", "thumb": "thumbs/cake.jpg", "alt": "Cake", "data-type": "image" },
//!     { "thumb": "thumbs/song.jpg", "alt": "Song", "data-type": "video", "video-src": "videos/song.mp4" }
//! ] }
//! ```
//!
//! `data-type` defaults to `image`. An entry without the source its type
//! needs is skipped with a warning instead of failing the whole gallery.

use crate::domain::media::{MediaContent, MediaItem, MediaKind};
use crate::error::LoadError;
use serde::{Deserialize, Serialize};

/// Discriminant of a manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Video,
    #[default]
    #[serde(other)]
    Image,
}

impl From<EntryType> for MediaKind {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Image => MediaKind::Image,
            EntryType::Video => MediaKind::Video,
        }
    }
}

/// One raw entry of the `media` array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(default)]
    pub thumb: String,

    #[serde(default)]
    pub alt: String,

    #[serde(rename = "data-type", default)]
    pub data_type: EntryType,

    #[serde(rename = "video-src", default, skip_serializing_if = "Option::is_none")]
    pub video_src: Option<String>,
}

impl ManifestEntry {
    /// Converts the entry, or `None` when its source is missing.
    #[must_use]
    pub fn into_item(self) -> Option<MediaItem> {
        let source = match self.data_type {
            EntryType::Image => self.src,
            EntryType::Video => self.video_src,
        }
        .filter(|source| !source.trim().is_empty())?;

        Some(match self.data_type {
            EntryType::Image => MediaItem::image(source, self.thumb, self.alt),
            EntryType::Video => MediaItem::video(source, self.thumb, self.alt),
        })
    }
}

impl From<&MediaItem> for ManifestEntry {
    fn from(item: &MediaItem) -> Self {
        let (src, video_src, data_type) = match item.content() {
            MediaContent::Image { src } => (Some(src.clone()), None, EntryType::Image),
            MediaContent::Video { video_src } => (None, Some(video_src.clone()), EntryType::Video),
        };
        Self {
            src,
            thumb: item.thumb().to_string(),
            alt: item.alt().to_string(),
            data_type,
            video_src,
        }
    }
}

/// The whole manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub media: Vec<ManifestEntry>,
}

impl Manifest {
    #[must_use]
    pub fn from_items(items: &[MediaItem]) -> Self {
        Self {
            media: items.iter().map(ManifestEntry::from).collect(),
        }
    }

    /// Converts entries in order, skipping invalid ones.
    #[must_use]
    pub fn into_items(self) -> Vec<MediaItem> {
        let mut items = Vec::with_capacity(self.media.len());
        for (index, entry) in self.media.into_iter().enumerate() {
            let kind = MediaKind::from(entry.data_type);
            match entry.into_item() {
                Some(item) => items.push(item),
                None => {
                    tracing::warn!(index, %kind, "skipping manifest entry without a source");
                }
            }
        }
        items
    }

    /// Pretty JSON as written by `generate-manifest`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decodes manifest bytes into gallery items.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the document is not a manifest.
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<MediaItem>, LoadError> {
    let manifest: Manifest =
        serde_json::from_slice(bytes).map_err(|err| LoadError::Parse(err.to_string()))?;
    Ok(manifest.into_items())
}
