// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # kurl - Small Blocking HTTP Client
//!
//! Configure a client once, then fetch. Every call builds its own transfer,
//! runs it to completion on the calling thread and returns an immutable
//! [`Response`] snapshot.
//!
//! ## Features
//!
//! - Per-client defaults: timeout, redirects, user agent, Accept-Encoding
//! - Default header lines merged with per-call headers, duplicates dropped
//! - Typed, ordered option maps with per-key override
//! - Response helpers: status classes, JSON parsing, save to disk
//!
//! ## Example
//!
//! ```rust,no_run
//! use kurl::{HttpClient, JsonBody};
//!
//! fn main() -> kurl::Result<()> {
//!     let mut client = HttpClient::new();
//!     client.set_timeout(5);
//!     client.set_encoding("gzip")?;
//!     client.add_header("Accept", "application/json");
//!
//!     let response = client.get("https://example.com/api/items")?;
//!     if response.is_successful() {
//!         if let JsonBody::Parsed(items) = response.json() {
//!             println!("{}", items);
//!         }
//!     }
//!
//!     response.save_to("items.json")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{
    Encoding, HeaderList, HttpClient, HttpClientConfig, Info, InfoValue, JsonBody, OptionKey,
    Options, Payload, Request, Response, Transfer, TransferOption, TransferOutcome,
    ReqwestTransfer,
};

/// kurl version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
