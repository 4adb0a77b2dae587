// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability and
//! architectural purity.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem),
//!   [`MediaKind`](media::MediaKind))
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::newtypes::ZoomScale),
//!   [`TooltipTimeout`](ui::newtypes::TooltipTimeout)) and geometry
//!   ([`Point`](ui::Point), [`Size`](ui::Size))

pub mod media;
pub mod ui;
