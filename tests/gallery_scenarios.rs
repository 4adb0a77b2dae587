// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery behavior through the public API: manifest on disk,
//! controller with the iced render state, share and access helpers.

use birthday_gallery::application::access::PasswordGate;
use birthday_gallery::application::gallery::{GalleryController, GallerySettings, ModalKey};
use birthday_gallery::application::port::{MediaLoader, MemoryStore, ShareLauncher};
use birthday_gallery::application::prompt::PromptSuppression;
use birthday_gallery::application::share::{ShareOutcome, SharePlatform};
use birthday_gallery::domain::media::{MediaItem, MediaKind};
use birthday_gallery::domain::ui::{Point, Size, Vector};
use birthday_gallery::error::{Error, LoadError, Result};
use birthday_gallery::infrastructure::FileManifestLoader;
use birthday_gallery::media::load_gallery;
use birthday_gallery::ui::gallery::{ModalSurface, WindowCommand};
use chrono::{Duration, TimeZone, Utc};
use std::fs;
use tempfile::tempdir;

fn images(count: usize) -> Vec<MediaItem> {
    (0..count)
        .map(|i| MediaItem::image(format!("img/{i}.jpg"), format!("thumb/{i}.jpg"), format!("Photo {i}")))
        .collect()
}

fn gallery(items: Vec<MediaItem>) -> GalleryController<ModalSurface> {
    GalleryController::new(items, GallerySettings::default(), ModalSurface::new())
}

#[derive(Default)]
struct RecordingLauncher {
    opened: Vec<String>,
    copied: Vec<String>,
    block_windows: bool,
}

impl ShareLauncher for RecordingLauncher {
    fn open_window(&mut self, url: &str) -> Result<()> {
        if self.block_windows {
            return Err(Error::PopupBlocked(url.to_string()));
        }
        self.opened.push(url.to_string());
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[test]
fn navigating_past_the_end_wraps_to_the_first_photo() {
    let mut gallery = gallery(images(3));
    assert!(gallery.open(0));
    for _ in 0..3 {
        gallery.next();
    }

    assert_eq!(gallery.state().current_index(), 0);
    assert_eq!(gallery.state().counter().as_deref(), Some("1/3"));
    let displayed = gallery.view().displayed().expect("modal shows an item");
    assert_eq!(displayed.counter, "1/3");
    assert_eq!(displayed.item.source(), "img/0.jpg");
}

#[test]
fn previous_from_first_photo_goes_to_last() {
    let mut gallery = gallery(images(4));
    gallery.open(0);
    gallery.previous();
    assert_eq!(gallery.state().current_index(), 3);
}

#[test]
fn keyboard_drives_the_open_modal() {
    let mut gallery = gallery(images(3));
    gallery.open(1);

    gallery.handle_key(&ModalKey::ArrowRight);
    assert_eq!(gallery.state().current_index(), 2);

    gallery.handle_key(&ModalKey::Character("f".into()));
    assert_eq!(
        gallery.view_mut().drain_window_commands(),
        vec![WindowCommand::Fullscreen(true)]
    );

    gallery.handle_key(&ModalKey::Escape);
    assert!(!gallery.state().is_open());
    assert!(!gallery.view().is_modal_visible());
    assert!(!gallery.view().is_scroll_locked());
}

#[test]
fn clicking_the_center_zooms_without_moving_the_image() {
    let mut gallery = gallery(images(1));
    gallery.open(0);
    gallery.set_zoom_bounds(Size::new(100.0, 100.0), Size::new(100.0, 100.0));

    assert!(gallery.toggle_zoom_at(Point::new(50.0, 50.0)));
    let (scale, offset) = gallery.view().transform();
    assert_eq!(scale.value(), 2.0);
    assert_eq!(offset, Vector::ZERO);
}

#[test]
fn reopening_the_modal_resets_zoom() {
    let mut gallery = gallery(images(2));
    gallery.open(0);
    gallery.set_zoom_bounds(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
    gallery.toggle_zoom_at(Point::new(10.0, 10.0));
    assert!(gallery.state().zoom().is_zoomed());

    gallery.close();
    gallery.open(1);
    assert!(!gallery.state().zoom().is_zoomed());
    assert_eq!(gallery.view().transform().1, Vector::ZERO);
}

#[test]
fn see_more_reveals_everything_then_hides() {
    let settings = GallerySettings {
        initial_visible: 2,
        reveal_batch: 2,
        keep_last_visible: false,
        ..GallerySettings::default()
    };
    let mut gallery = GalleryController::new(images(5), settings, ModalSurface::new());
    assert_eq!(gallery.view().revealed(), &[0, 1]);
    assert!(gallery.view().is_see_more_visible());

    let mut previous = gallery.view().revealed().len();
    while gallery.view().is_see_more_visible() {
        gallery.reveal_more();
        let now = gallery.view().revealed().len();
        assert!(now > previous);
        assert!(now <= 5);
        previous = now;
    }
    assert_eq!(gallery.view().revealed(), &[0, 1, 2, 3, 4]);
}

#[test]
fn last_photo_is_reachable_before_see_more() {
    let settings = GallerySettings {
        initial_visible: 2,
        reveal_batch: 2,
        ..GallerySettings::default()
    };
    let mut gallery = GalleryController::new(images(5), settings, ModalSurface::new());
    assert_eq!(gallery.view().revealed(), &[0, 1, 4]);

    gallery.open(4);
    assert_eq!(gallery.view().highlighted(), Some(2));
}

#[test]
fn sharing_uses_the_displayed_photo() {
    let mut gallery = gallery(images(2));
    gallery.open(1);
    let mut launcher = RecordingLauncher::default();

    assert_eq!(
        gallery.share(SharePlatform::Facebook, &mut launcher),
        ShareOutcome::Opened
    );
    assert_eq!(
        gallery.share(SharePlatform::CopyLink, &mut launcher),
        ShareOutcome::Copied
    );
    assert_eq!(launcher.opened.len(), 1);
    assert!(launcher.opened[0].starts_with("https://www.facebook.com/"));
    assert_eq!(launcher.copied.len(), 1);
}

#[test]
fn blocked_popup_becomes_a_tooltip() {
    let mut gallery = gallery(images(1));
    gallery.open(0);
    let mut launcher = RecordingLauncher {
        block_windows: true,
        ..RecordingLauncher::default()
    };

    let outcome = gallery.share(SharePlatform::Twitter, &mut launcher);
    assert_eq!(outcome, ShareOutcome::Blocked);
    assert_eq!(outcome.tooltip_key(), Some("share-popup-blocked"));
}

#[tokio::test]
async fn manifest_on_disk_becomes_resolved_items() {
    let dir = tempdir().expect("tempdir");
    let manifest = r#"{
        "media": [
            { "data-type": "image", "src": "images/cake.jpg", "thumb": "thumbs/cake.jpg", "alt": "Cake" },
            { "data-type": "video", "video-src": "images/song.mp4", "thumb": "thumbs/song.jpg", "alt": "Song" },
            { "data-type": "image", "src": "https://cdn.example.com/balloons.jpg", "thumb": "https://cdn.example.com/balloons_t.jpg", "alt": "Balloons" }
        ]
    }"#;
    let path = dir.path().join("gallery-data.json");
    fs::write(&path, manifest).expect("write manifest");

    let items = FileManifestLoader::new(&path)
        .load_media()
        .await
        .expect("manifest loads");

    let kinds: Vec<MediaKind> = items.iter().map(MediaItem::kind).collect();
    assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Video, MediaKind::Image]);
    assert_eq!(
        items[0].source(),
        dir.path().join("images/cake.jpg").to_string_lossy()
    );
    assert_eq!(items[2].source(), "https://cdn.example.com/balloons.jpg");
}

#[tokio::test]
async fn missing_manifest_yields_an_empty_gallery() {
    let dir = tempdir().expect("tempdir");
    let loader = FileManifestLoader::new(dir.path().join("absent.json"));

    let (items, error) = load_gallery(&loader).await;
    assert!(items.is_empty());
    assert!(matches!(error, Some(LoadError::Io(_))));

    let mut gallery = gallery(items);
    assert!(!gallery.open(0));
    assert!(!gallery.view().is_see_more_visible());
}

#[test]
fn passphrase_unlocks_until_locked_again() {
    let hash = PasswordGate::hash_passphrase("confetti");
    let gate = PasswordGate::from_hex(Some(&hash)).expect("valid hash");
    let mut store = MemoryStore::new();

    assert!(gate.is_required());
    assert!(!gate.is_authenticated(&store));
    assert!(!gate.unlock("streamers", &mut store));
    assert!(gate.unlock("confetti", &mut store));
    assert!(gate.is_authenticated(&store));

    gate.lock(&mut store);
    assert!(!gate.is_authenticated(&store));
}

#[test]
fn dismissed_prompt_stays_hidden_for_the_cooldown() {
    let suppression = PromptSuppression::new(7);
    let mut store = MemoryStore::new();
    let dismissed_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    assert!(!suppression.is_suppressed(&mut store, dismissed_at));
    assert!(suppression.record_dismissal(&mut store, "linux", dismissed_at));
    assert!(suppression.is_suppressed(&mut store, dismissed_at + Duration::days(6)));
    assert!(!suppression.is_suppressed(&mut store, dismissed_at + Duration::days(8)));
    // The expired record is cleaned up.
    assert!(store.is_empty());
}
