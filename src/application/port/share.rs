// SPDX-License-Identifier: MPL-2.0
//! Share launcher port definition.

use crate::error::Result;

/// Port for the two side effects a share button can have.
///
/// Implementations return [`Error::PopupBlocked`](crate::error::Error::PopupBlocked)
/// when no window could be opened, and any other error when the clipboard is
/// unavailable. The share helper turns both into user-facing tooltips.
pub trait ShareLauncher {
    /// Opens `url` in a new browser window or tab.
    ///
    /// # Errors
    ///
    /// Returns an error if the window could not be opened.
    fn open_window(&mut self, url: &str) -> Result<()>;

    /// Writes `text` to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be accessed.
    fn write_clipboard(&mut self, text: &str) -> Result<()>;
}
