// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! A configurable blocking client, the option and header types it merges,
//! and the response snapshot it returns.

mod client;
mod encoding;
mod header_list;
mod options;
mod request;
mod response;
mod transfer;

pub use client::{HttpClient, HttpClientConfig};
pub use encoding::Encoding;
pub use header_list::HeaderList;
pub use options::{OptionKey, Options, TransferOption};
pub use request::{Payload, Request};
pub use response::{info_keys, Info, InfoValue, JsonBody, Response};
pub use transfer::{ReqwestTransfer, Transfer, TransferOutcome};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("kurl/", env!("CARGO_PKG_VERSION"));
