// SPDX-License-Identifier: MPL-2.0
//! `robots.txt` generation.

use super::parse_base_url;
use crate::error::{Error, Result};

/// Builds a robots file allowing everything except `disallow` paths and
/// pointing crawlers at the sitemap.
///
/// # Errors
///
/// Returns [`Error::Config`] for an invalid base URL.
pub fn build_robots(base_url: &str, disallow: &[String]) -> Result<String> {
    let base = parse_base_url(base_url)?;
    let sitemap = base
        .join("sitemap.xml")
        .map_err(|err| Error::Config(err.to_string()))?;

    let mut robots = String::from("User-agent: *\nAllow: /\n");
    for path in disallow {
        let path = path.trim();
        if path.is_empty() {
            continue;
        }
        if path.starts_with('/') {
            robots.push_str(&format!("Disallow: {path}\n"));
        } else {
            robots.push_str(&format!("Disallow: /{path}\n"));
        }
    }
    robots.push_str(&format!("\nSitemap: {sitemap}\n"));
    Ok(robots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_robots_allows_all() {
        let robots = build_robots("https://party.example.com", &[]).expect("robots");
        assert_eq!(
            robots,
            "User-agent: *\nAllow: /\n\nSitemap: https://party.example.com/sitemap.xml\n"
        );
    }

    #[test]
    fn disallow_paths_are_normalized() {
        let robots = build_robots(
            "https://party.example.com/greeting/",
            &["private".into(), "/drafts/".into(), " ".into()],
        )
        .expect("robots");
        assert!(robots.contains("Disallow: /private\n"));
        assert!(robots.contains("Disallow: /drafts/\n"));
        assert_eq!(robots.matches("Disallow").count(), 2);
        assert!(robots.ends_with("Sitemap: https://party.example.com/greeting/sitemap.xml\n"));
    }
}
