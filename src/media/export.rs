// SPDX-License-Identifier: MPL-2.0
//! Saving the displayed bitmap to disk.
//!
//! The output format is chosen from the target path's extension. Only PNG
//! and JPEG are supported; any other extension is rejected before the file
//! is touched.

use super::image::ImageData;
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::ImageFormat;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JPEG encoder quality (0-100).
pub const JPEG_QUALITY: u8 = 90;

/// A save-dialog filter: label plus the extensions it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

static FILTERS: [Filter; 2] = [
    Filter {
        name: "PNG Files (*.png)",
        extensions: &["png"],
    },
    Filter {
        name: "JPG Files (*.jpg;*.jpeg)",
        extensions: &["jpg", "jpeg"],
    },
];

/// Returns the filters offered by the save dialog, PNG first.
#[must_use]
pub fn filters() -> &'static [Filter] {
    &FILTERS
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG format (lossless).
    #[default]
    Png,
    /// JPEG format (lossy, no alpha).
    Jpeg,
}

impl ExportFormat {
    /// Returns the canonical file extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Detects format from a file extension, ignoring case.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    /// Detects format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] when the extension is missing or
    /// names a format other than PNG or JPEG.
    pub fn from_path(path: &Path) -> Result<ExportFormat> {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&ext).ok_or(Error::UnsupportedFormat(ext))
    }
}

/// Encodes `image` and writes it to `path`, creating or truncating the file.
///
/// Returns the format that was written.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions (nothing is
/// written), [`Error::Io`] if the file cannot be created, and
/// [`Error::Encode`] if encoding fails.
pub fn save_image(image: &ImageData, path: &Path) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    let dynamic = image.to_dynamic_image()?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = dynamic.to_rgb8();
            let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            rgb.write_with_encoder(encoder)
                .map_err(|e| Error::Encode(format!("Failed to encode JPEG: {e}")))?;
        }
        ExportFormat::Png => {
            dynamic
                .write_to(&mut writer, format.image_format())
                .map_err(|e| Error::Encode(format!("Failed to encode PNG: {e}")))?;
        }
    }

    writer.flush()?;
    tracing::debug!(path = %path.display(), ?format, "image written");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_image(width: u32, height: u32) -> ImageData {
        let pixels = (0..width * height)
            .flat_map(|i| [(i % 255) as u8, 64, 128, 200])
            .collect();
        ImageData::from_rgba(width, height, pixels)
    }

    #[test]
    fn from_extension_is_case_insensitive() {
        assert_eq!(ExportFormat::from_extension("png"), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_extension("PNG"), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_extension("jpg"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("JPEG"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("bmp"), None);
        assert_eq!(ExportFormat::from_extension(""), None);
    }

    #[test]
    fn from_path_rejects_missing_extension() {
        let err = ExportFormat::from_path(&PathBuf::from("/tmp/picture")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ext) if ext.is_empty()));
    }

    #[test]
    fn from_path_reports_the_unsupported_extension() {
        let err = ExportFormat::from_path(&PathBuf::from("cat.gif")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ext) if ext == "gif"));
    }

    #[test]
    fn filters_cover_png_then_jpeg() {
        let filters = filters();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].extensions, &["png"]);
        assert_eq!(filters[1].extensions, &["jpg", "jpeg"]);
        for filter in filters {
            for ext in filter.extensions {
                assert!(ExportFormat::from_extension(ext).is_some());
            }
        }
    }

    #[test]
    fn save_png_round_trips_dimensions_and_pixels() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.png");
        let image = sample_image(5, 3);

        let format = save_image(&image, &path).expect("save png");
        assert_eq!(format, ExportFormat::Png);

        let reloaded = image_rs::open(&path).expect("reopen png").to_rgba8();
        assert_eq!(reloaded.dimensions(), (5, 3));
        assert_eq!(reloaded.as_raw().as_slice(), image.rgba_bytes());
        assert_eq!(
            image_rs::ImageFormat::from_path(&path).ok(),
            Some(ImageFormat::Png)
        );
    }

    #[test]
    fn save_jpeg_with_uppercase_extension_writes_jpeg() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.JPEG");

        let format = save_image(&sample_image(8, 6), &path).expect("save jpeg");
        assert_eq!(format, ExportFormat::Jpeg);

        let bytes = std::fs::read(&path).expect("read jpeg");
        assert_eq!(
            image_rs::guess_format(&bytes).ok(),
            Some(ImageFormat::Jpeg)
        );
        let reloaded = image_rs::load_from_memory(&bytes).expect("decode jpeg");
        assert_eq!((reloaded.width(), reloaded.height()), (8, 6));
    }

    #[test]
    fn unsupported_extension_writes_nothing() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.bmp");

        let result = save_image(&sample_image(2, 2), &path);
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
        assert!(!path.exists());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("out.png");
        std::fs::write(&path, vec![0u8; 1 << 16]).expect("seed file");

        save_image(&sample_image(2, 2), &path).expect("save png");

        let reloaded = image_rs::open(&path).expect("reopen png");
        assert_eq!((reloaded.width(), reloaded.height()), (2, 2));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("out.png");

        assert!(matches!(
            save_image(&sample_image(1, 1), &path),
            Err(Error::Io(_))
        ));
    }
}
