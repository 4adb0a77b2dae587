// SPDX-License-Identifier: MPL-2.0
//! Manifest generation from an images directory and a thumbnails directory.
//!
//! Files are paired by stem: `images/cake.jpg` uses `thumbs/cake.jpg`, or any
//! other thumbnail named `cake.*`. An image without a thumbnail uses itself.
//! A video without a thumbnail has nothing to show in the grid and is
//! skipped.

use crate::directory_scanner::{scan_directory, ScannedFile};
use crate::domain::media::{MediaItem, MediaKind};
use crate::error::Result;
use crate::media::manifest::Manifest;
use std::collections::HashMap;
use std::path::PathBuf;

/// Inputs of `generate-manifest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    pub images_dir: PathBuf,
    pub thumbs_dir: PathBuf,
    /// Prefix written before media file names, e.g. `images/`.
    pub image_prefix: String,
    /// Prefix written before thumbnail file names, e.g. `thumbs/`.
    pub thumb_prefix: String,
}

impl ManifestOptions {
    /// Options whose prefixes are the directory names themselves.
    #[must_use]
    pub fn new(images_dir: impl Into<PathBuf>, thumbs_dir: impl Into<PathBuf>) -> Self {
        let images_dir = images_dir.into();
        let thumbs_dir = thumbs_dir.into();
        let image_prefix = dir_name(&images_dir);
        let thumb_prefix = dir_name(&thumbs_dir);
        Self {
            images_dir,
            thumbs_dir,
            image_prefix,
            thumb_prefix,
        }
    }
}

fn dir_name(dir: &std::path::Path) -> String {
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(|name| format!("{name}/"))
        .unwrap_or_default()
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedManifest {
    pub manifest: Manifest,
    /// Videos left out because they had no thumbnail.
    pub skipped: Vec<PathBuf>,
}

impl GeneratedManifest {
    #[must_use]
    pub fn count(&self, kind: MediaKind) -> usize {
        self.manifest
            .media
            .iter()
            .filter(|entry| MediaKind::from(entry.data_type) == kind)
            .count()
    }
}

/// Scans both directories and builds the manifest.
///
/// # Errors
///
/// Returns an error if either directory cannot be read.
pub fn generate_manifest(options: &ManifestOptions) -> Result<GeneratedManifest> {
    let media = scan_directory(&options.images_dir)?;
    let thumbs: HashMap<String, String> = scan_directory(&options.thumbs_dir)?
        .into_iter()
        .filter(|file| file.kind == MediaKind::Image)
        .map(|file| (file.stem().to_string(), file.file_name().to_string()))
        .collect();

    let mut items = Vec::with_capacity(media.len());
    let mut skipped = Vec::new();

    for file in &media {
        let src = join_prefix(&options.image_prefix, file.file_name());
        let thumb = thumbs
            .get(file.stem())
            .map(|name| join_prefix(&options.thumb_prefix, name));

        match (file.kind, thumb) {
            (MediaKind::Image, thumb) => {
                let thumb = thumb.unwrap_or_else(|| src.clone());
                items.push(MediaItem::image(src, thumb, alt_text(file)));
            }
            (MediaKind::Video, Some(thumb)) => {
                items.push(MediaItem::video(src, thumb, alt_text(file)));
            }
            (MediaKind::Video, None) => {
                tracing::warn!(path = %file.path.display(), "skipping video without thumbnail");
                skipped.push(file.path.clone());
            }
        }
    }

    tracing::info!(
        items = items.len(),
        skipped = skipped.len(),
        "manifest generated"
    );

    Ok(GeneratedManifest {
        manifest: Manifest::from_items(&items),
        skipped,
    })
}

fn join_prefix(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Human-readable caption from the file stem: `first-candle_2024` becomes
/// `first candle 2024`.
fn alt_text(file: &ScannedFile) -> String {
    file.stem()
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
