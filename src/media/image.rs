// SPDX-License-Identifier: MPL-2.0
//! Decoding downloaded bytes into a displayable bitmap.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, RgbaImage};
use std::sync::Arc;

/// A decoded bitmap: the handle iced renders plus the RGBA pixels kept for
/// encoding when the user saves.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Decoded RGBA bytes, shared so clones stay cheap.
    pixels: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let pixels = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, pixels.to_vec());
        Self {
            handle,
            width,
            height,
            pixels,
        }
    }

    /// Returns the decoded RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Rebuilds a `DynamicImage` from the stored pixels for encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the pixel buffer does not match the
    /// recorded dimensions.
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
            .map(DynamicImage::ImageRgba8)
            .ok_or_else(|| {
                Error::Encode(format!(
                    "pixel buffer of {} bytes does not match {}x{}",
                    self.pixels.len(),
                    self.width,
                    self.height
                ))
            })
    }
}

/// Decodes encoded image bytes (PNG, JPEG) into an [`ImageData`].
///
/// The format is sniffed from the content, not from the URL.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
