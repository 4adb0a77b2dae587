// SPDX-License-Identifier: MPL-2.0
//! Configuration files drive localization, the gate and the manifest
//! location.

use birthday_gallery::app::paths::AppPaths;
use birthday_gallery::app::{Flags, PageContext};
use birthday_gallery::application::access::PasswordGate;
use birthday_gallery::application::port::MemoryStore;
use birthday_gallery::config::{self, Config};
use birthday_gallery::i18n::fluent::I18n;
use birthday_gallery::infrastructure::ManifestLocation;
use std::fs;
use tempfile::tempdir;

fn flags_for(config_dir: &std::path::Path, data_dir: &std::path::Path) -> Flags {
    Flags {
        lang: None,
        paths: AppPaths::new(
            Some(data_dir.to_string_lossy().into_owned()),
            Some(config_dir.to_string_lossy().into_owned()),
        ),
        manifest: None,
    }
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("save en-US");
    let loaded = config::load_from_path(&path).expect("load en-US");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("save fr");
    let loaded = config::load_from_path(&path).expect("load fr");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("gallery-see-more"), "Voir plus");
}

#[test]
fn gated_page_starts_locked_and_unlocks() {
    let config_dir = tempdir().expect("config dir");
    let data_dir = tempdir().expect("data dir");
    let mut config = Config::default();
    config.access.passphrase_hash = Some(PasswordGate::hash_passphrase("happy birthday"));
    config::save_to_path(&config, &config_dir.path().join("settings.toml")).expect("save");

    let mut store = MemoryStore::new();
    let flags = flags_for(config_dir.path(), data_dir.path());
    let (mut context, warnings) = PageContext::resolve(&flags, &store);

    assert!(warnings.is_empty(), "unexpected warnings {warnings:?}");
    assert!(context.gate.is_required());
    assert!(!context.authenticated);
    assert!(!context.unlock("happy", &mut store));
    assert!(context.unlock("happy birthday", &mut store));

    // A new page load in the same session skips the gate.
    let (again, _) = PageContext::resolve(&flags, &store);
    assert!(again.authenticated);
}

#[test]
fn broken_hash_keeps_the_gallery_sealed() {
    let config_dir = tempdir().expect("config dir");
    let data_dir = tempdir().expect("data dir");
    fs::write(
        config_dir.path().join("settings.toml"),
        "[access]\npassphrase_hash = \"not-hex\"\n",
    )
    .expect("write config");

    let mut store = MemoryStore::new();
    let (mut context, warnings) =
        PageContext::resolve(&flags_for(config_dir.path(), data_dir.path()), &store);

    assert!(warnings.contains(&"notification-config-load-error".to_string()));
    assert!(!context.authenticated);
    assert!(!context.unlock("", &mut store));
    assert!(!context.unlock("anything", &mut store));
}

#[test]
fn relative_manifest_is_resolved_against_config_dir() {
    let config_dir = tempdir().expect("config dir");
    let data_dir = tempdir().expect("data dir");
    fs::write(
        config_dir.path().join("settings.toml"),
        "[gallery]\nmanifest = \"site/gallery-data.json\"\n",
    )
    .expect("write config");

    let store = MemoryStore::new();
    let flags = flags_for(config_dir.path(), data_dir.path());
    let (context, _) = PageContext::resolve(&flags, &store);
    assert_eq!(
        context.manifest,
        Some(ManifestLocation::File(
            config_dir.path().join("site/gallery-data.json")
        ))
    );

    let overridden = Flags {
        manifest: Some("https://party.example.com/gallery-data.json".to_string()),
        ..flags
    };
    let (context, _) = PageContext::resolve(&overridden, &store);
    assert!(matches!(context.manifest, Some(ManifestLocation::Remote(_))));
}

#[test]
fn unreadable_config_falls_back_to_defaults_with_warning() {
    let config_dir = tempdir().expect("config dir");
    fs::write(config_dir.path().join("settings.toml"), "[gallery\n").expect("write");

    let paths = AppPaths::new(None, Some(config_dir.path().to_string_lossy().into_owned()));
    let (config, warning) = config::load(&paths);
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
