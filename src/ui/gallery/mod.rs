// SPDX-License-Identifier: MPL-2.0
//! The gallery page as drawn by iced: render state and fixed layout.

pub mod layout;
pub mod surface;

pub use surface::{DisplayedMedia, FocusTarget, ModalSurface, WindowCommand};
