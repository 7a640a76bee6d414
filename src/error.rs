// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Download failed (transport error or non-success HTTP status).
    Network(String),
    /// The downloaded bytes are not a decodable image.
    Decode(String),
    /// The bitmap could not be encoded to the requested format.
    Encode(String),
    /// The chosen file extension maps to no supported export format.
    /// Carries the offending extension (empty when the path has none).
    UnsupportedFormat(String),
    /// A save was requested while no image is displayed.
    NoImage,
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-save-error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Network(_) => "notification-load-error-network",
            Error::Decode(_) => "notification-load-error-decode",
            Error::Encode(_) => "notification-save-error-encode",
            Error::UnsupportedFormat(_) => "notification-save-error-format",
            Error::NoImage => "notification-save-no-image",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
            Error::UnsupportedFormat(ext) if ext.is_empty() => {
                write!(f, "Unsupported file format: missing extension")
            }
            Error::UnsupportedFormat(ext) => write!(f, "Unsupported file format: .{}", ext),
            Error::NoImage => write!(f, "No image is displayed"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            image_rs::ImageError::Encoding(e) => Error::Encode(e.to_string()),
            image_rs::ImageError::Unsupported(e) => Error::Encode(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
