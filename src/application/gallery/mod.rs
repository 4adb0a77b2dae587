// SPDX-License-Identifier: MPL-2.0
//! Gallery use cases: the modal controller, its keyboard contract and the
//! progressive thumbnail reveal.

pub mod controller;
pub mod disclosure;
pub mod keyboard;

pub use controller::{GalleryController, GallerySettings, GalleryState, ModalState};
pub use disclosure::Disclosure;
pub use keyboard::{KeyAction, ModalKey};
