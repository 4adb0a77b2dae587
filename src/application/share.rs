// SPDX-License-Identifier: MPL-2.0
//! Social share links and the share button behavior.
//!
//! Links are rebuilt every time the modal displays an item. Pressing a share
//! button never fails loudly: a blocked window or an unavailable clipboard
//! is reported as a [`ShareOutcome`] that the page turns into a tooltip.

use crate::application::port::ShareLauncher;
use crate::domain::media::MediaItem;
use crate::error::Error;
use reqwest::Url;

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const PINTEREST_PIN: &str = "https://pinterest.com/pin/create/button/";

/// Share targets offered next to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Pinterest,
    CopyLink,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::Facebook,
        SharePlatform::Twitter,
        SharePlatform::Pinterest,
        SharePlatform::CopyLink,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SharePlatform::Facebook => "facebook",
            SharePlatform::Twitter => "twitter",
            SharePlatform::Pinterest => "pinterest",
            SharePlatform::CopyLink => "copy-link",
        }
    }

    /// i18n key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SharePlatform::Facebook => "share-facebook",
            SharePlatform::Twitter => "share-twitter",
            SharePlatform::Pinterest => "share-pinterest",
            SharePlatform::CopyLink => "share-copy-link",
        }
    }
}

/// Per-platform share URLs for one displayed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    page_url: String,
    facebook: String,
    twitter: String,
    /// Pinterest pins need an image, so videos have no Pinterest link.
    pinterest: Option<String>,
}

impl ShareLinks {
    /// Builds the links for sharing `item` from the page at `page_url`.
    #[must_use]
    pub fn build(item: &MediaItem, page_url: &str, share_text: &str) -> Self {
        let mut links = Self::for_page(page_url, share_text);
        if item.is_image() {
            let description = if item.alt().is_empty() {
                share_text
            } else {
                item.alt()
            };
            let media = absolute_url(page_url, item.source());
            links.pinterest = Some(with_query(
                PINTEREST_PIN,
                &[
                    ("url", page_url),
                    ("media", &media),
                    ("description", description),
                ],
            ));
        }
        links
    }

    /// Links that share the page itself, used before any item is shown.
    #[must_use]
    pub fn for_page(page_url: &str, share_text: &str) -> Self {
        Self {
            page_url: page_url.to_string(),
            facebook: with_query(FACEBOOK_SHARER, &[("u", page_url)]),
            twitter: with_query(TWITTER_INTENT, &[("url", page_url), ("text", share_text)]),
            pinterest: None,
        }
    }

    /// Returns the URL a platform button opens, or `None` when the platform
    /// is not offered for this item. [`SharePlatform::CopyLink`] yields the
    /// page URL.
    #[must_use]
    pub fn url_for(&self, platform: SharePlatform) -> Option<&str> {
        match platform {
            SharePlatform::Facebook => Some(&self.facebook),
            SharePlatform::Twitter => Some(&self.twitter),
            SharePlatform::Pinterest => self.pinterest.as_deref(),
            SharePlatform::CopyLink => Some(&self.page_url),
        }
    }

    #[must_use]
    pub fn page_url(&self) -> &str {
        &self.page_url
    }
}

fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    Url::parse_with_params(base, params)
        .map(String::from)
        .unwrap_or_else(|_| base.to_string())
}

/// Resolves a possibly relative media path against the page URL.
fn absolute_url(page_url: &str, source: &str) -> String {
    Url::parse(page_url)
        .and_then(|base| base.join(source))
        .map(String::from)
        .unwrap_or_else(|_| source.to_string())
}

/// Result of pressing a share button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Opened,
    Copied,
    /// The share window could not be opened.
    Blocked,
    ClipboardUnavailable,
    /// The platform has no link for the current item.
    Unsupported,
}

impl ShareOutcome {
    /// i18n key of the tooltip to show, if any.
    #[must_use]
    pub fn tooltip_key(self) -> Option<&'static str> {
        match self {
            ShareOutcome::Opened | ShareOutcome::Unsupported => None,
            ShareOutcome::Copied => Some("share-link-copied"),
            ShareOutcome::Blocked => Some("share-popup-blocked"),
            ShareOutcome::ClipboardUnavailable => Some("share-clipboard-unavailable"),
        }
    }

    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            ShareOutcome::Blocked | ShareOutcome::ClipboardUnavailable
        )
    }
}

/// Keeps the current share links and performs share actions.
#[derive(Debug, Clone)]
pub struct ShareHelper {
    page_url: String,
    share_text: String,
    links: ShareLinks,
}

impl ShareHelper {
    #[must_use]
    pub fn new(page_url: impl Into<String>, share_text: impl Into<String>) -> Self {
        let page_url = page_url.into();
        let share_text = share_text.into();
        let links = ShareLinks::for_page(&page_url, &share_text);
        Self {
            page_url,
            share_text,
            links,
        }
    }

    /// Rebuilds the links for a newly displayed item and returns them.
    pub fn update_for(&mut self, item: &MediaItem) -> ShareLinks {
        self.links = ShareLinks::build(item, &self.page_url, &self.share_text);
        self.links.clone()
    }

    /// Goes back to page-level links (modal closed).
    pub fn reset(&mut self) {
        self.links = ShareLinks::for_page(&self.page_url, &self.share_text);
    }

    #[must_use]
    pub fn links(&self) -> &ShareLinks {
        &self.links
    }

    /// Performs the share action for `platform`.
    pub fn share(&self, platform: SharePlatform, launcher: &mut impl ShareLauncher) -> ShareOutcome {
        let Some(url) = self.links.url_for(platform) else {
            return ShareOutcome::Unsupported;
        };

        if platform == SharePlatform::CopyLink {
            return match launcher.write_clipboard(url) {
                Ok(()) => ShareOutcome::Copied,
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard unavailable");
                    ShareOutcome::ClipboardUnavailable
                }
            };
        }

        match launcher.open_window(url) {
            Ok(()) => ShareOutcome::Opened,
            Err(Error::PopupBlocked(reason)) => {
                tracing::warn!(platform = platform.as_str(), %reason, "share window blocked");
                ShareOutcome::Blocked
            }
            Err(err) => {
                tracing::warn!(platform = platform.as_str(), error = %err, "share window failed");
                ShareOutcome::Blocked
            }
        }
    }
}
