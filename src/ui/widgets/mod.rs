// SPDX-License-Identifier: MPL-2.0
pub mod media_guard;

pub use media_guard::media_guard;
