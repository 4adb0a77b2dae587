// SPDX-License-Identifier: MPL-2.0
//! Everything the page needs to know before it mounts.
//!
//! [`PageContext`] is resolved once at startup from the command line, the
//! configuration and the persisted store, and then owned by the app. The
//! gallery is only mounted while [`PageContext::authenticated`] is true.

use super::message::Flags;
use super::paths::AppPaths;
use crate::application::access::PasswordGate;
use crate::application::port::KeyValueStore;
use crate::config::{self, Config, DEFAULT_MANIFEST, DEFAULT_PAGE_URL};
use crate::infrastructure::ManifestLocation;

#[derive(Debug, Clone)]
pub struct PageContext {
    pub config: Config,
    pub paths: AppPaths,
    /// Public URL used to build share links.
    pub page_url: String,
    /// `None` when the configured manifest location cannot be parsed.
    pub manifest: Option<ManifestLocation>,
    pub gate: PasswordGate,
    pub authenticated: bool,
}

impl PageContext {
    /// Loads the configuration and resolves the page settings.
    ///
    /// Returns the context and i18n keys of warnings to show on the page.
    pub fn resolve(flags: &Flags, store: &impl KeyValueStore) -> (Self, Vec<String>) {
        let (config, config_warning) = config::load(&flags.paths);
        let mut warnings: Vec<String> = config_warning.into_iter().collect();

        let gate = match PasswordGate::from_hex(config.access.passphrase_hash.as_deref()) {
            Ok(gate) => gate,
            Err(err) => {
                tracing::error!(error = %err, "passphrase hash unreadable, gallery stays locked");
                warnings.push("notification-config-load-error".to_string());
                PasswordGate::sealed()
            }
        };

        let manifest = resolve_manifest(flags.manifest.as_deref(), &config, &flags.paths);
        if manifest.is_none() {
            warnings.push("notification-load-error-io".to_string());
        }

        let page_url = config
            .gallery
            .page_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());

        let authenticated = gate.is_authenticated(store);
        tracing::debug!(authenticated, gated = gate.is_required(), "page context resolved");

        (
            Self {
                config,
                paths: flags.paths.clone(),
                page_url,
                manifest,
                gate,
                authenticated,
            },
            warnings,
        )
    }

    /// Checks a passphrase attempt. Success is remembered in `store`.
    pub fn unlock(&mut self, attempt: &str, store: &mut impl KeyValueStore) -> bool {
        if self.gate.unlock(attempt, store) {
            self.authenticated = true;
        }
        self.authenticated
    }

    /// Forgets the session. Without a gate this does nothing.
    pub fn lock(&mut self, store: &mut impl KeyValueStore) {
        if self.gate.is_required() {
            self.gate.lock(store);
            self.authenticated = false;
        }
    }
}

/// Command line wins over configuration. Relative paths from the
/// configuration are taken relative to the config directory.
fn resolve_manifest(
    cli: Option<&str>,
    config: &Config,
    paths: &AppPaths,
) -> Option<ManifestLocation> {
    let parsed = match cli {
        Some(cli) => ManifestLocation::parse(cli),
        None => {
            let configured = config.gallery.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST);
            ManifestLocation::parse(configured).map(|location| match paths.config_dir() {
                Some(dir) => location.relative_to(&dir),
                None => location,
            })
        }
    };

    match parsed {
        Ok(location) => Some(location),
        Err(err) => {
            tracing::error!(error = %err, "invalid manifest location");
            None
        }
    }
}
