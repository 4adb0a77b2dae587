// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure and
//! presentation adapters implement. The gallery controller and the share
//! helper only talk to these traits, so they run unchanged against the iced
//! surface and against recording fakes in tests.
//!
//! # Available Ports
//!
//! - [`gesture`]: Optional touch gesture recognition
//! - [`media`]: Gallery manifest loading
//! - [`share`]: Opening share windows and writing to the clipboard
//! - [`storage`]: Small key-value persistence (session flag, prompt records)
//! - [`view`]: Everything the modal controller asks of the screen
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - [`MediaLoader`] is the only async port; callers wrap it in an Iced `Task`
//! - Fallible methods return the crate error types

pub mod gesture;
pub mod media;
pub mod share;
pub mod storage;
pub mod view;

// Re-export main types for convenience
pub use gesture::{Gesture, GestureCapability, NoGestures, PointerInput};
pub use media::MediaLoader;
pub use share::ShareLauncher;
pub use storage::{KeyValueStore, MemoryStore};
pub use view::{MediaDisplay, ModalView};
