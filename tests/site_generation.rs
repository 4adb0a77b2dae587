// SPDX-License-Identifier: MPL-2.0
//! The site generators produce files the viewer and crawlers can consume.

use birthday_gallery::application::port::MediaLoader;
use birthday_gallery::domain::media::MediaKind;
use birthday_gallery::infrastructure::FileManifestLoader;
use birthday_gallery::site::{build_robots, build_sitemap, generate_manifest, ManifestOptions};
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn generated_manifest_loads_back_into_the_gallery() {
    let root = tempdir().expect("tempdir");
    let images = root.path().join("images");
    let thumbs = root.path().join("thumbs");
    fs::create_dir_all(&images).expect("images dir");
    fs::create_dir_all(&thumbs).expect("thumbs dir");
    for name in ["01-cake.jpg", "02-candles.png", "03-song.mp4"] {
        fs::write(images.join(name), b"media").expect("write media");
    }
    for name in ["01-cake.jpg", "03-song.jpg"] {
        fs::write(thumbs.join(name), b"thumb").expect("write thumb");
    }
    fs::write(images.join("notes.txt"), b"ignored").expect("write notes");

    let generated = generate_manifest(&ManifestOptions::new(&images, &thumbs)).expect("generate");
    let manifest_path = root.path().join("gallery-data.json");
    let json = serde_json::to_string_pretty(&generated.manifest).expect("serialize");
    fs::write(&manifest_path, json).expect("write manifest");

    let items = FileManifestLoader::new(&manifest_path)
        .load_media()
        .await
        .expect("load");

    assert_eq!(items.len(), 3);
    assert_eq!(items[2].kind(), MediaKind::Video);
    assert_eq!(items[0].alt(), "01 cake");
    assert_eq!(
        items[0].thumb(),
        root.path().join("thumbs/01-cake.jpg").to_string_lossy()
    );
    // No thumbnail for the PNG: it stands in for itself.
    assert_eq!(items[1].thumb(), items[1].source());
}

#[test]
fn sitemap_and_robots_agree_on_location() {
    let base = "https://party.example.com/lea";
    let sitemap = build_sitemap(
        base,
        &["".to_string(), "gallery.html".to_string()],
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("date"),
    )
    .expect("sitemap");
    let robots = build_robots(base, &["/private".to_string()]).expect("robots");

    assert!(sitemap.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(sitemap.contains("<loc>https://party.example.com/lea/</loc>"));
    assert!(sitemap.contains("<loc>https://party.example.com/lea/gallery.html</loc>"));
    assert_eq!(sitemap.matches("<lastmod>2024-06-01</lastmod>").count(), 2);

    assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
    assert!(robots.contains("Disallow: /private\n"));
    assert!(robots.contains("Sitemap: https://party.example.com/lea/sitemap.xml"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let lastmod = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");
    assert!(build_sitemap("party.example.com", &[], lastmod).is_err());
    assert!(build_robots("ftp://party.example.com", &[]).is_err());
}
