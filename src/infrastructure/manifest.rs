// SPDX-License-Identifier: MPL-2.0
//! Manifest loader adapters.
//!
//! Implements [`MediaLoader`] for a manifest on disk and for one served over
//! HTTP. Both resolve relative references against the manifest location
//! before handing items out.

use crate::application::port::MediaLoader;
use crate::domain::media::MediaItem;
use crate::error::LoadError;
use crate::media::manifest::parse_manifest;
use crate::media::resolver::MediaResolver;
use reqwest::Url;
use std::fmt;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("BirthdayGallery/", env!("CARGO_PKG_VERSION"));

/// Where the manifest lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocation {
    File(PathBuf),
    Remote(Url),
}

impl ManifestLocation {
    /// Parses a command-line or config value.
    ///
    /// `http://` and `https://` values are URLs, `file://` URLs become paths,
    /// anything else is a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] for an empty value and
    /// [`LoadError::Network`] for a malformed URL.
    pub fn parse(input: &str) -> Result<Self, LoadError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LoadError::Io("empty manifest location".into()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|err| LoadError::Network(format!("invalid manifest URL: {err}")))?;
            return Ok(ManifestLocation::Remote(url));
        }

        if lower.starts_with("file://") {
            let path = Url::parse(trimmed)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| LoadError::Io(format!("invalid file URL: {trimmed}")))?;
            return Ok(ManifestLocation::File(path));
        }

        Ok(ManifestLocation::File(PathBuf::from(trimmed)))
    }

    /// Resolves a relative file location against `base_dir`.
    #[must_use]
    pub fn relative_to(self, base_dir: &Path) -> Self {
        match self {
            ManifestLocation::File(path) if path.is_relative() => {
                ManifestLocation::File(base_dir.join(path))
            }
            other => other,
        }
    }
}

impl fmt::Display for ManifestLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestLocation::File(path) => write!(f, "{}", path.display()),
            ManifestLocation::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// Reads the manifest from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileManifestLoader {
    path: PathBuf,
    resolver: MediaResolver,
}

impl FileManifestLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resolver = MediaResolver::for_manifest(&ManifestLocation::File(path.clone()));
        Self { path, resolver }
    }
}

impl MediaLoader for FileManifestLoader {
    async fn load_media(&self) -> Result<Vec<MediaItem>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|err| LoadError::Io(format!("{}: {err}", self.path.display())))?;
        let items = parse_manifest(&bytes)?;
        Ok(self.resolver.resolve_items(items))
    }
}

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns [`LoadError::Network`] if the TLS backend cannot be initialized.
pub fn http_client() -> Result<reqwest::Client, LoadError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| LoadError::Network(e.to_string()))
}

/// Fetches a URL, failing on transport errors and non-success statuses.
///
/// # Errors
///
/// Returns [`LoadError::Network`] or [`LoadError::Status`].
pub async fn fetch_bytes(client: &reqwest::Client, url: Url) -> Result<Vec<u8>, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::Status(response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Fetches the manifest over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpManifestLoader {
    client: reqwest::Client,
    url: Url,
    resolver: MediaResolver,
}

impl HttpManifestLoader {
    /// # Errors
    ///
    /// Returns [`LoadError::Network`] if the HTTP client cannot be built.
    pub fn new(url: Url) -> Result<Self, LoadError> {
        Ok(Self::with_client(http_client()?, url))
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        let resolver = MediaResolver::for_manifest(&ManifestLocation::Remote(url.clone()));
        Self {
            client,
            url,
            resolver,
        }
    }
}

impl MediaLoader for HttpManifestLoader {
    async fn load_media(&self) -> Result<Vec<MediaItem>, LoadError> {
        let bytes = fetch_bytes(&self.client, self.url.clone()).await?;
        let items = parse_manifest(&bytes)?;
        Ok(self.resolver.resolve_items(items))
    }
}

/// Loader chosen from a [`ManifestLocation`] at startup.
#[derive(Debug, Clone)]
pub enum ManifestLoader {
    File(FileManifestLoader),
    Http(HttpManifestLoader),
}

impl ManifestLoader {
    /// # Errors
    ///
    /// Returns [`LoadError::Network`] if an HTTP client is needed and cannot
    /// be built.
    pub fn for_location(location: &ManifestLocation) -> Result<Self, LoadError> {
        Ok(match location {
            ManifestLocation::File(path) => ManifestLoader::File(FileManifestLoader::new(path)),
            ManifestLocation::Remote(url) => {
                ManifestLoader::Http(HttpManifestLoader::new(url.clone())?)
            }
        })
    }
}

impl MediaLoader for ManifestLoader {
    async fn load_media(&self) -> Result<Vec<MediaItem>, LoadError> {
        match self {
            ManifestLoader::File(loader) => loader.load_media().await,
            ManifestLoader::Http(loader) => loader.load_media().await,
        }
    }
}
