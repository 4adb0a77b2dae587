// SPDX-License-Identifier: MPL-2.0
//! `birthday_gallery` is a passphrase-gated birthday greeting gallery built
//! with the Iced GUI framework.
//!
//! The page shows a progressively revealed thumbnail grid loaded from a JSON
//! manifest. A modal viewer adds circular navigation, click/wheel/pinch zoom
//! with soft-clamped panning, swipe gestures, and share links. Companion
//! subcommands generate the manifest, `sitemap.xml` and `robots.txt` for a
//! static deployment.
//!
//! # Layers
//!
//! - [`domain`]: Pure types (media items, geometry, bounded newtypes)
//! - [`application`]: Ports and use cases (gallery controller, share, gate)
//! - [`infrastructure`]: Adapters for files, HTTP, browser and clipboard
//! - [`ui`] and [`app`]: The iced surface and application loop

#![doc(html_root_url = "https://docs.rs/birthday_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod site;
pub mod ui;

#[cfg(test)]
mod test_utils;
