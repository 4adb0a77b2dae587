// SPDX-License-Identifier: MPL-2.0
//! Decoding gallery images into iced handles.
//!
//! Only the header is decoded to learn the size; iced decodes the pixels
//! itself when the handle is first drawn.

use crate::domain::ui::Size;
use crate::error::LoadError;
use crate::infrastructure::manifest::fetch_bytes;
use crate::media::MediaSource;
use iced::widget::image;
use std::io::Cursor;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Wraps encoded bytes (JPEG, PNG, ...) after reading their dimensions.
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self, LoadError> {
        let (width, height) = image_rs::ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|err| LoadError::Io(err.to_string()))?
            .into_dimensions()
            .map_err(|err| LoadError::Parse(err.to_string()))?;

        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
        })
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Largest size with the image's aspect ratio that fits in `container`.
    #[must_use]
    pub fn fit_within(&self, container: Size) -> Size {
        fit_within(self.size(), container)
    }
}

/// Scales `content` down (or up) to fit `container`, keeping the ratio.
#[must_use]
pub fn fit_within(content: Size, container: Size) -> Size {
    if content.is_empty() || container.is_empty() {
        return Size::ZERO;
    }
    let scale = (container.width / content.width).min(container.height / content.height);
    Size::new(content.width * scale, content.height * scale)
}

/// Reads a local or remote image. Remote sources need an HTTP client.
pub async fn load_image(
    source: MediaSource,
    client: Option<reqwest::Client>,
) -> Result<ImageData, LoadError> {
    let bytes = match source {
        MediaSource::Local(path) => tokio::fs::read(&path)
            .await
            .map_err(|err| LoadError::Io(format!("{}: {}", path.display(), err)))?,
        MediaSource::Remote(url) => {
            let client =
                client.ok_or_else(|| LoadError::Network("no HTTP client".to_string()))?;
            fetch_bytes(&client, url).await?
        }
    };
    ImageData::from_encoded(bytes)
}
