// SPDX-License-Identifier: MPL-2.0
//! `sitemap.xml` generation (sitemaps.org protocol 0.9).

use super::parse_base_url;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Builds a sitemap listing `pages` below `base_url`.
///
/// An empty page list yields a single entry for the base URL itself.
///
/// # Errors
///
/// Returns [`Error::Config`] for an invalid base URL or page path, and
/// [`Error::Io`] if the XML cannot be written.
pub fn build_sitemap(base_url: &str, pages: &[String], lastmod: NaiveDate) -> Result<String> {
    let base = parse_base_url(base_url)?;
    let mut locations = Vec::with_capacity(pages.len().max(1));
    if pages.is_empty() {
        locations.push(base.to_string());
    }
    for page in pages {
        let url = base
            .join(page.trim_start_matches('/'))
            .map_err(|err| Error::Config(format!("invalid page '{page}': {err}")))?;
        locations.push(url.to_string());
    }

    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)])),
    )?;
    for loc in &locations {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", loc)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }
    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| Error::Io(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Io(e.to_string()))
}
