// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: Modal controller, keyboard contract, thumbnail reveal
//! - [`share`]: Share links and share button behavior
//! - [`access`]: Passphrase gate
//! - [`prompt`]: Install prompt dismissal records
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the gallery controller through [`port::ModalView`]
//!
//! # Example
//!
//! ```ignore
//! use birthday_gallery::application::gallery::{GalleryController, GallerySettings};
//!
//! let mut gallery = GalleryController::new(items, GallerySettings::default(), surface);
//! gallery.open(0);
//! gallery.navigate(1);
//! ```

pub mod access;
pub mod gallery;
pub mod port;
pub mod prompt;
pub mod share;
