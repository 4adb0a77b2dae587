// SPDX-License-Identifier: MPL-2.0
//! System adapters for sharing and video playback.
//!
//! Share windows open in the default browser; copy-link writes to the
//! system clipboard. Videos are handed to whatever the desktop associates
//! with the file or URL.

use crate::application::port::ShareLauncher;
use crate::error::{Error, PlaybackError, Result};
use crate::media::resolver::MediaSource;
use reqwest::Url;

/// Opens share URLs with `webbrowser` and copies with `arboard`.
#[derive(Debug, Default)]
pub struct SystemShareLauncher;

impl ShareLauncher for SystemShareLauncher {
    fn open_window(&mut self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|e| Error::PopupBlocked(e.to_string()))
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::Io(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::Io(e.to_string()))
    }
}

/// Converts a resolved source into something a browser or player can open.
///
/// # Errors
///
/// Returns [`PlaybackError::Unresolvable`] for a relative local path.
pub fn playable_url(source: &MediaSource) -> std::result::Result<Url, PlaybackError> {
    match source {
        MediaSource::Remote(url) => Ok(url.clone()),
        MediaSource::Local(path) => Url::from_file_path(path)
            .map_err(|()| PlaybackError::Unresolvable(path.display().to_string())),
    }
}

/// Plays a video with the system's default handler.
///
/// # Errors
///
/// Returns a [`PlaybackError`] if the source cannot be resolved or nothing
/// accepts it.
pub fn play_video(reference: &str) -> std::result::Result<(), PlaybackError> {
    let url = playable_url(&MediaSource::from_reference(reference))?;
    webbrowser::open(url.as_str()).map_err(|e| PlaybackError::LaunchFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn relative_local_path_is_unresolvable() {
        let err = playable_url(&MediaSource::Local(PathBuf::from("videos/a.mp4"))).unwrap_err();
        assert!(matches!(err, PlaybackError::Unresolvable(_)));
    }

    #[cfg(unix)]
    #[test]
    fn absolute_local_path_becomes_file_url() {
        let url = playable_url(&MediaSource::Local(PathBuf::from("/srv/a.mp4"))).expect("url");
        assert_eq!(url.as_str(), "file:///srv/a.mp4");
    }

    #[test]
    fn remote_url_is_kept() {
        let remote = Url::parse("https://cdn.example.com/a.mp4").expect("url");
        let url = playable_url(&MediaSource::Remote(remote.clone())).expect("url");
        assert_eq!(url, remote);
    }
}
