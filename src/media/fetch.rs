// SPDX-License-Identifier: MPL-2.0
//! Downloading catalog images over HTTP.

use super::image::{decode, ImageData};
use crate::error::{Error, Result};
use futures_util::StreamExt;
use std::time::Duration;

/// Responses larger than this are rejected (64 MiB).
pub const MAX_DOWNLOAD_BYTES: u64 = 64 * 1024 * 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Downloads the body at `url`.
///
/// # Errors
///
/// Returns [`Error::Network`] on transport failures, non-success HTTP
/// statuses and bodies larger than [`MAX_DOWNLOAD_BYTES`].
pub async fn fetch_image_bytes(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(user_agent())
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    let declared = response.content_length().unwrap_or(0);
    if declared > MAX_DOWNLOAD_BYTES {
        return Err(Error::Network(format!(
            "response too large ({declared} bytes)"
        )));
    }

    let capacity = usize::try_from(declared).unwrap_or(0);
    let mut body = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        body.extend_from_slice(&chunk);
        if body.len() as u64 > MAX_DOWNLOAD_BYTES {
            return Err(Error::Network(format!(
                "response exceeded {MAX_DOWNLOAD_BYTES} bytes"
            )));
        }
    }

    tracing::debug!(url, bytes = body.len(), "image downloaded");
    Ok(body)
}

/// Downloads and decodes the image at `url`.
///
/// # Errors
///
/// Propagates [`fetch_image_bytes`] errors, and returns [`Error::Decode`]
/// when the body is not an image.
pub async fn fetch_image(url: &str) -> Result<ImageData> {
    let bytes = fetch_image_bytes(url).await?;
    decode(&bytes)
}
