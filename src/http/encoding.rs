// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Accept-Encoding selection

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::{Error, Result};

/// Content encodings the client is willing to receive.
///
/// The string forms match the values accepted by [`HttpClient::set_encoding`]:
/// `"identity"`, `"deflate"`, `"gzip"`, and `""` for every supported encoding.
///
/// [`HttpClient::set_encoding`]: crate::HttpClient::set_encoding
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    AsRefStr,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Encoding {
    /// Any encoding the transfer layer can decode
    #[default]
    #[strum(serialize = "")]
    #[serde(rename = "")]
    Any,
    /// No compression
    #[strum(serialize = "identity")]
    #[serde(rename = "identity")]
    Identity,
    /// zlib deflate
    #[strum(serialize = "deflate")]
    #[serde(rename = "deflate")]
    Deflate,
    /// gzip
    #[strum(serialize = "gzip")]
    #[serde(rename = "gzip")]
    Gzip,
}

impl Encoding {
    /// Parse an encoding value, rejecting anything outside the supported set
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value).map_err(|_| Error::InvalidEncoding(value.to_string()))
    }

    /// Whether gzip bodies are decoded
    pub fn gzip(&self) -> bool {
        matches!(self, Encoding::Any | Encoding::Gzip)
    }

    /// Whether deflate bodies are decoded
    pub fn deflate(&self) -> bool {
        matches!(self, Encoding::Any | Encoding::Deflate)
    }

    /// Whether brotli bodies are decoded
    pub fn brotli(&self) -> bool {
        matches!(self, Encoding::Any)
    }

    /// Explicit Accept-Encoding value, when the decoders do not imply one
    pub fn accept_header(&self) -> Option<&'static str> {
        match self {
            Encoding::Identity => Some("identity"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_values() {
        assert_eq!(Encoding::parse("").unwrap(), Encoding::Any);
        assert_eq!(Encoding::parse("identity").unwrap(), Encoding::Identity);
        assert_eq!(Encoding::parse("deflate").unwrap(), Encoding::Deflate);
        assert_eq!(Encoding::parse("gzip").unwrap(), Encoding::Gzip);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for value in ["br", "GZIP", "gzip, deflate", " ", "compress"] {
            let err = Encoding::parse(value).unwrap_err();
            assert!(matches!(err, Error::InvalidEncoding(ref v) if v == value));
        }
    }

    #[test]
    fn test_decoders() {
        assert!(Encoding::Any.gzip() && Encoding::Any.deflate() && Encoding::Any.brotli());
        assert!(Encoding::Gzip.gzip() && !Encoding::Gzip.deflate());
        assert!(!Encoding::Identity.gzip() && !Encoding::Identity.brotli());
        assert_eq!(Encoding::Identity.accept_header(), Some("identity"));
        assert_eq!(Encoding::Gzip.accept_header(), None);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Encoding::Gzip).unwrap(), "\"gzip\"");
        assert_eq!(serde_json::to_string(&Encoding::Any).unwrap(), "\"\"");
        let parsed: Encoding = serde_json::from_str("\"identity\"").unwrap();
        assert_eq!(parsed, Encoding::Identity);
    }
}
