// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for kurl
//!
//! Configuration mistakes are reported before any network activity.
//! Transfer failures carry the request URL where it is known.

use thiserror::Error;

/// Result type alias for kurl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kurl
#[derive(Error, Debug)]
pub enum Error {
    /// Unsupported Accept-Encoding value
    #[error("Unsupported encoding: '{0}'")]
    InvalidEncoding(String),

    /// Header line that cannot be sent
    #[error("Invalid header '{line}': {reason}")]
    InvalidHeader { line: String, reason: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transfer exceeded the configured timeout
    #[error("Request timed out after {duration_ms}ms: {url}")]
    Timeout { duration_ms: u64, url: String },

    /// Transfer failed (DNS, connect, TLS, redirect limit, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Body is not valid UTF-8
    #[error("Invalid UTF-8 in body: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid header error
    pub fn invalid_header(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidHeader {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(duration_ms: u64, url: impl Into<String>) -> Self {
        Error::Timeout {
            duration_ms,
            url: url.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Timeout { .. })
    }

    /// Check if this error was raised before the request left the process
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::InvalidEncoding(_)
                | Error::InvalidHeader { .. }
                | Error::Url(_)
                | Error::Config(_)
        )
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Timeout { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}
