// SPDX-License-Identifier: MPL-2.0
//! Resolution of manifest-relative media references.
//!
//! Manifests written by `generate-manifest` use paths relative to the
//! manifest itself. Loaders rewrite every `src`, `video-src` and `thumb` to
//! an absolute path or URL so the rest of the gallery never needs to know
//! where the manifest came from.

use crate::domain::media::{MediaContent, MediaItem};
use crate::infrastructure::manifest::ManifestLocation;
use reqwest::Url;
use std::path::{Path, PathBuf};

/// A resolved reference, ready to be read from disk or fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Local(PathBuf),
    Remote(Url),
}

impl MediaSource {
    /// Classifies an already resolved reference.
    #[must_use]
    pub fn from_reference(reference: &str) -> Self {
        match parse_web_url(reference) {
            Some(url) => MediaSource::Remote(url),
            None => MediaSource::Local(PathBuf::from(reference)),
        }
    }
}

fn parse_web_url(reference: &str) -> Option<Url> {
    Url::parse(reference)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Base {
    Directory(PathBuf),
    Url(Url),
}

/// Resolves references against the manifest location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResolver {
    base: Base,
}

impl MediaResolver {
    #[must_use]
    pub fn for_manifest(location: &ManifestLocation) -> Self {
        let base = match location {
            ManifestLocation::File(path) => Base::Directory(
                path.parent()
                    .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
            ),
            ManifestLocation::Remote(url) => Base::Url(url.clone()),
        };
        Self { base }
    }

    /// Returns the absolute form of `reference`.
    ///
    /// Web URLs and absolute paths are returned unchanged.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> String {
        if reference.is_empty() || parse_web_url(reference).is_some() {
            return reference.to_string();
        }
        match &self.base {
            Base::Directory(dir) => {
                let path = Path::new(reference);
                if path.is_absolute() {
                    reference.to_string()
                } else {
                    dir.join(path).to_string_lossy().into_owned()
                }
            }
            Base::Url(url) => url
                .join(reference)
                .map(String::from)
                .unwrap_or_else(|_| reference.to_string()),
        }
    }

    #[must_use]
    pub fn resolve_item(&self, item: &MediaItem) -> MediaItem {
        let thumb = self.resolve(item.thumb());
        match item.content() {
            MediaContent::Image { src } => MediaItem::image(self.resolve(src), thumb, item.alt()),
            MediaContent::Video { video_src } => {
                MediaItem::video(self.resolve(video_src), thumb, item.alt())
            }
        }
    }

    #[must_use]
    pub fn resolve_items(&self, items: Vec<MediaItem>) -> Vec<MediaItem> {
        items.iter().map(|item| self.resolve_item(item)).collect()
    }
}
