// SPDX-License-Identifier: MPL-2.0
//! Build-time site generators.
//!
//! These back the `generate-manifest`, `sitemap` and `robots` subcommands
//! that prepare a gallery for publishing.

pub mod manifest;
pub mod robots;
pub mod sitemap;

pub use manifest::{generate_manifest, GeneratedManifest, ManifestOptions};
pub use robots::build_robots;
pub use sitemap::build_sitemap;

use crate::error::{Error, Result};
use reqwest::Url;

/// Parses the public base URL of the site, adding a trailing slash so that
/// page paths join below it.
///
/// # Errors
///
/// Returns [`Error::Config`] if the value is not an absolute http(s) URL.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|err| Error::Config(format!("invalid base URL '{base_url}': {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "base URL must use http or https: {base_url}"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
