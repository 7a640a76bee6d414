// SPDX-License-Identifier: MPL-2.0
//! Image download, decoding and export.

pub mod export;
pub mod fetch;
pub mod image;

pub use export::{save_image, ExportFormat};
pub use fetch::fetch_image;
pub use image::{decode, ImageData};
