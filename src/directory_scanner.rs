// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting media files.
//!
//! This module scans a directory for supported media formats (images and
//! videos) and returns them in alphabetical order, which is the order the
//! generated gallery displays them in.

use crate::domain::media::MediaKind;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// A media file found by [`scan_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub kind: MediaKind,
}

impl ScannedFile {
    /// File name including extension.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// File name without extension, used to pair media with thumbnails.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }
}

/// Scans a directory (non-recursively) for supported media files.
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<ScannedFile>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if let Some(kind) = media::detect_media_kind(&path) {
            files.push(ScannedFile { path, kind });
        }
    }

    sort_alphabetically(&mut files);
    Ok(files)
}

/// Sorts files by name, case-insensitively, with the exact name as tiebreaker.
fn sort_alphabetically(files: &mut [ScannedFile]) {
    files.sort_by(|a, b| {
        a.file_name()
            .to_lowercase()
            .cmp(&b.file_name().to_lowercase())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });
}
