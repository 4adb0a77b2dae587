// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `reqwest`, the system clipboard and the default browser.
//!
//! # Available Adapters
//!
//! - [`manifest`]: Manifest loading from disk or HTTP (implements [`MediaLoader`])
//! - [`share`]: Browser and clipboard access (implements [`ShareLauncher`])
//!
//! [`MediaLoader`]: crate::application::port::MediaLoader
//! [`ShareLauncher`]: crate::application::port::ShareLauncher

pub mod manifest;
pub mod share;

// Re-export main types for convenience
pub use manifest::{FileManifestLoader, HttpManifestLoader, ManifestLoader, ManifestLocation};
pub use share::SystemShareLauncher;
