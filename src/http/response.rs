// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response snapshot

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Well-known info keys
pub mod info_keys {
    pub const URL: &str = "url";
    pub const HTTP_CODE: &str = "http_code";
    pub const CONTENT_TYPE: &str = "content_type";
    pub const SIZE_DOWNLOAD: &str = "size_download";
    pub const DOWNLOAD_CONTENT_LENGTH: &str = "download_content_length";
    pub const TOTAL_TIME: &str = "total_time";
    pub const REDIRECTED: &str = "redirected";
    pub const REDIRECT_COUNT: &str = "redirect_count";
    pub const HTTP_VERSION: &str = "http_version";
    pub const PRIMARY_IP: &str = "primary_ip";
    pub const PRIMARY_PORT: &str = "primary_port";
    pub const EFFECTIVE_METHOD: &str = "effective_method";
}

/// Scalar metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl InfoValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            InfoValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value; integers are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            InfoValue::Int(v) => Some(*v as f64),
            InfoValue::Float(v) => Some(*v),
            InfoValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::Int(v) => write!(f, "{}", v),
            InfoValue::Float(v) => write!(f, "{}", v),
            InfoValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for InfoValue {
    fn from(v: i64) -> Self {
        InfoValue::Int(v)
    }
}

impl From<u16> for InfoValue {
    fn from(v: u16) -> Self {
        InfoValue::Int(i64::from(v))
    }
}

impl From<f64> for InfoValue {
    fn from(v: f64) -> Self {
        InfoValue::Float(v)
    }
}

impl From<&str> for InfoValue {
    fn from(v: &str) -> Self {
        InfoValue::Text(v.to_string())
    }
}

impl From<String> for InfoValue {
    fn from(v: String) -> Self {
        InfoValue::Text(v)
    }
}

/// Transfer metadata keyed by info name
pub type Info = BTreeMap<String, InfoValue>;

/// Outcome of [`Response::json`]
#[derive(Debug)]
pub enum JsonBody {
    /// Content type does not declare JSON
    NotJson,
    /// Body parsed successfully
    Parsed(serde_json::Value),
    /// Content type declares JSON but the body is malformed
    Invalid(serde_json::Error),
}

impl JsonBody {
    pub fn is_parsed(&self) -> bool {
        matches!(self, JsonBody::Parsed(_))
    }

    /// Parsed value, if any
    pub fn value(&self) -> Option<&serde_json::Value> {
        match self {
            JsonBody::Parsed(value) => Some(value),
            _ => None,
        }
    }

    /// `NotJson` becomes `Ok(None)`, malformed JSON becomes an error
    pub fn into_result(self) -> Result<Option<serde_json::Value>> {
        match self {
            JsonBody::NotJson => Ok(None),
            JsonBody::Parsed(value) => Ok(Some(value)),
            JsonBody::Invalid(err) => Err(Error::Serialization(err)),
        }
    }
}

/// Immutable snapshot of a completed transfer
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    info: Info,
    body: Bytes,
}

impl Response {
    /// Create a new response
    pub fn new(info: Info, body: impl Into<Bytes>) -> Self {
        Self {
            info,
            body: body.into(),
        }
    }

    /// Full transfer metadata
    pub fn info(&self) -> &Info {
        &self.info
    }

    /// Single metadata value
    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.info.get(key)
    }

    /// HTTP status code, 0 when no response was recorded
    pub fn code(&self) -> u16 {
        self.get(info_keys::HTTP_CODE)
            .and_then(InfoValue::as_i64)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(0)
    }

    /// Status code as a typed value
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.code()).ok()
    }

    /// Final URL, after redirects
    pub fn url(&self) -> &str {
        self.get(info_keys::URL)
            .and_then(InfoValue::as_str)
            .unwrap_or_default()
    }

    /// Media type sent by the server
    pub fn content_type(&self) -> Option<&str> {
        self.get(info_keys::CONTENT_TYPE).and_then(InfoValue::as_str)
    }

    /// Body size in bytes, headers excluded.
    ///
    /// Counts the body after content decoding, so for a gzip or deflate
    /// response this is larger than the bytes that crossed the wire.
    pub fn size(&self) -> u64 {
        self.get(info_keys::SIZE_DOWNLOAD)
            .and_then(InfoValue::as_i64)
            .and_then(|size| u64::try_from(size).ok())
            .unwrap_or(0)
    }

    /// Raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Get body as text
    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Status is exactly 200
    pub fn is_ok(&self) -> bool {
        self.code() == 200
    }

    /// Status is in the 2xx range
    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.code())
    }

    /// Status is in the 3xx range
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.code())
    }

    /// Status is in the 4xx range
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code())
    }

    /// Status is in the 5xx range
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code())
    }

    /// Check if content type declares JSON (`application/json` or `+json`)
    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| {
                let essence = ct.split(';').next().unwrap_or_default().trim();
                essence.eq_ignore_ascii_case("application/json")
                    || essence.to_ascii_lowercase().ends_with("+json")
            })
            .unwrap_or(false)
    }

    /// Parse the body as JSON when the content type declares it
    pub fn json(&self) -> JsonBody {
        if !self.is_json() {
            return JsonBody::NotJson;
        }
        match serde_json::from_slice(&self.body) {
            Ok(value) => JsonBody::Parsed(value),
            Err(err) => JsonBody::Invalid(err),
        }
    }

    /// Deserialize a JSON body into `T`; `Ok(None)` when not JSON
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if !self.is_json() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&self.body)?))
    }

    /// Write the raw body to `path`, creating or truncating the file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        file.write_all(&self.body)?;
        file.flush()?;
        tracing::debug!(path = %path.display(), bytes = self.body.len(), "Saved response body");
        Ok(())
    }
}
