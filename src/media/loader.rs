// SPDX-License-Identifier: MPL-2.0
//! Page-level loading boundary.
//!
//! A failed manifest load renders an empty gallery. The error is logged and
//! handed back separately so the page can also show a notification.

use crate::application::port::MediaLoader;
use crate::domain::media::MediaItem;
use crate::error::LoadError;

/// Loads the gallery, returning an empty list and the error on failure.
pub async fn load_gallery(loader: &impl MediaLoader) -> (Vec<MediaItem>, Option<LoadError>) {
    match loader.load_media().await {
        Ok(items) => {
            tracing::info!(count = items.len(), "gallery manifest loaded");
            (items, None)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load gallery manifest");
            (Vec::new(), Some(err))
        }
    }
}

/// Loads the gallery items. Never fails: errors yield an empty gallery.
pub async fn load_gallery_items(loader: &impl MediaLoader) -> Vec<MediaItem> {
    load_gallery(loader).await.0
}
