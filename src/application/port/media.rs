// SPDX-License-Identifier: MPL-2.0
//! Media loading port definition.
//!
//! This module defines the [`MediaLoader`] trait that produces the ordered
//! list of gallery items. Infrastructure adapters read the manifest from a
//! local file or fetch it over HTTP.

use crate::domain::media::MediaItem;
use crate::error::LoadError;
use std::future::Future;

/// Port for loading the gallery items.
///
/// The returned list is in display order. Implementations never partially
/// succeed: either the whole manifest is decoded (invalid entries dropped)
/// or a [`LoadError`] is returned.
///
/// # Example
///
/// ```ignore
/// use birthday_gallery::application::port::MediaLoader;
///
/// async fn count(loader: &impl MediaLoader) -> usize {
///     loader.load_media().await.map(|items| items.len()).unwrap_or(0)
/// }
/// ```
pub trait MediaLoader: Send + Sync {
    /// Loads and decodes every gallery item.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if:
    /// - The manifest cannot be read or fetched
    /// - The server answers with a non-success status
    /// - The document is not valid manifest JSON
    fn load_media(&self) -> impl Future<Output = Result<Vec<MediaItem>, LoadError>> + Send;
}

/// Loader that always yields the same result. Useful for tests and previews.
#[derive(Debug, Clone)]
pub struct StaticLoader {
    result: Result<Vec<MediaItem>, LoadError>,
}

impl StaticLoader {
    #[must_use]
    pub fn ok(items: Vec<MediaItem>) -> Self {
        Self { result: Ok(items) }
    }

    #[must_use]
    pub fn failing(error: LoadError) -> Self {
        Self { result: Err(error) }
    }
}

impl MediaLoader for StaticLoader {
    async fn load_media(&self) -> Result<Vec<MediaItem>, LoadError> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_loader_returns_configured_items() {
        let loader = StaticLoader::ok(vec![MediaItem::image("a.jpg", "a_t.jpg", "A")]);
        let items = loader.load_media().await.expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].source(), "a.jpg");
    }

    #[tokio::test]
    async fn failing_loader_returns_error() {
        let loader = StaticLoader::failing(LoadError::Status(500));
        assert_eq!(loader.load_media().await, Err(LoadError::Status(500)));
    }
}
