// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The gallery follows the Elm-style "state down, messages up" pattern: the
//! application controller drives [`gallery::ModalSurface`], and the app's
//! view reads it back.
//!
//! - [`gallery`] - Render state and fixed layout of the page and modal
//! - [`state`] - Zoom/pan, drag, touch gestures and tooltip state
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (media input guard)
//! - [`styles`] - Centralized styling (buttons, containers, tooltip)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
