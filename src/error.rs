// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaError),
}

/// Specific error types for attachment/media handling.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum MediaError {
    /// File format is not supported (e.g., not a decodable image)
    UnsupportedFormat,

    /// File decoded partially or not at all
    DecodeFailed(String),

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),

    /// Generic error with raw message
    Other(String),
}

impl MediaError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::UnsupportedFormat => "error-attachment-unsupported-format",
            MediaError::DecodeFailed(_) => "error-attachment-decode-failed",
            MediaError::IoError(_) => "error-attachment-io",
            MediaError::Other(_) => "error-attachment-general",
        }
    }

    /// Attempts to parse a raw decoder message into a specific `MediaError`.
    /// Used to categorize errors coming out of the image crate.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("unsupported") || msg_lower.contains("unknown format") {
            return MediaError::UnsupportedFormat;
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return MediaError::IoError(msg.to_string());
        }

        if msg_lower.contains("decod")
            || msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return MediaError::DecodeFailed(msg.to_string());
        }

        MediaError::Other(msg.to_string())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::UnsupportedFormat => write!(f, "Unsupported media format"),
            MediaError::DecodeFailed(msg) => write!(f, "Decoding failed: {}", msg),
            MediaError::IoError(msg) => write!(f, "I/O error: {}", msg),
            MediaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for MediaError {
    fn from(err: image_rs::ImageError) -> Self {
        MediaError::from_message(&err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
