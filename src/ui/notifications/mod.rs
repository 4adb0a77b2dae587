// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for load, playback, share and storage feedback.
//!
//! - Toast duration: 3s for success/info, 5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::from_error(&error));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
