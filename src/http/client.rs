// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::time::Duration;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::encoding::Encoding;
use super::header_list::HeaderList;
use super::options::{Options, TransferOption};
use super::request::{Payload, Request};
use super::response::Response;
use super::transfer::{ReqwestTransfer, Transfer};
use super::DEFAULT_USER_AGENT;
use crate::error::Result;

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Whole-transfer timeout in seconds, 0 for none
    pub timeout: u64,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Follow `Location` headers
    pub follow_location: bool,
    /// User agent string
    pub user_agent: String,
    /// Accepted content encodings
    pub encoding: Encoding,
    /// Header lines sent with every request
    pub headers: HeaderList,
    /// Options applied to every request, after the settings above
    #[serde(skip)]
    pub options: Options,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            max_redirects: 3,
            follow_location: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            encoding: Encoding::default(),
            headers: HeaderList::new(),
            options: Options::new(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in seconds
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set max redirects
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Set follow redirects
    pub fn follow_location(mut self, follow: bool) -> Self {
        self.follow_location = follow;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set accepted encodings
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Add a default header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.headers.push(name, value);
        self
    }

    /// Set default options
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

/// Blocking HTTP client.
///
/// Configuration lives on the client and is read, never written, while a
/// request runs: `request` borrows `&self` and every setter needs `&mut self`.
/// Share one client across threads for identical settings, or give each
/// thread its own client.
#[derive(Debug, Clone)]
pub struct HttpClient<T = ReqwestTransfer> {
    config: HttpClientConfig,
    transfer: T,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client whose every request starts from `options`
    pub fn with_options(options: Options) -> Self {
        Self::with_config(HttpClientConfig::default().options(options))
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self::with_transfer(config, ReqwestTransfer::new())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transfer> HttpClient<T> {
    /// Create a client on top of a custom transfer primitive
    pub fn with_transfer(config: HttpClientConfig, transfer: T) -> Self {
        Self { config, transfer }
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Get the transfer primitive
    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Set the whole-transfer timeout in seconds (0 disables it)
    pub fn set_timeout(&mut self, seconds: u64) {
        self.config.timeout = seconds;
    }

    /// Set the maximum number of redirects to follow
    pub fn set_max_redirects(&mut self, max: usize) {
        self.config.max_redirects = max;
    }

    /// Set the user agent
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.config.user_agent = user_agent.into();
    }

    /// Follow `Location` headers sent by the server
    pub fn set_follow_location(&mut self, follow: bool) {
        self.config.follow_location = follow;
    }

    /// Set the accepted encodings: `"identity"`, `"deflate"`, `"gzip"`, or
    /// `""` for all supported ones. Any other value is rejected and the
    /// current setting is kept.
    pub fn set_encoding(&mut self, encoding: &str) -> Result<()> {
        self.config.encoding = Encoding::parse(encoding)?;
        Ok(())
    }

    /// Append a default header line; duplicates are only dropped per request
    pub fn add_header(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        self.config.headers.push(name, value);
    }

    /// Resolve a request without executing it.
    ///
    /// Call options override the client's default options per key. An
    /// embedded `Headers` option is merged with the client headers and
    /// `headers`, first occurrence wins. The redirect limit is only kept
    /// when redirects are followed.
    pub fn prepare<H, S>(&self, url: &str, options: Options, headers: H) -> Result<Request>
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut effective = self.config.options.merged(&options);
        let embedded = effective.take_headers();

        let headers = HeaderList::merge(
            self.config
                .headers
                .iter()
                .chain(embedded.iter())
                .map(str::to_string)
                .chain(headers.into_iter().map(|h| h.as_ref().to_string())),
        );

        let mut request = Request::get(url)?;
        request.apply(TransferOption::Timeout(Duration::from_secs(self.config.timeout)));
        request.apply(TransferOption::FollowLocation(self.config.follow_location));
        request.apply(TransferOption::MaxRedirects(self.config.max_redirects));
        request.apply(TransferOption::UserAgent(self.config.user_agent.clone()));
        request.apply(TransferOption::Encoding(self.config.encoding));

        for option in effective {
            request.apply(option);
        }

        request.headers = headers;
        if !request.follow_location {
            request.max_redirects = None;
        }

        tracing::trace!(
            method = %request.method,
            url = %request.url,
            headers = request.headers.len(),
            "Prepared request"
        );

        Ok(request)
    }

    /// Execute a request
    pub fn request<H, S>(&self, url: &str, options: Options, headers: H) -> Result<Response>
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let request = self.prepare(url, options, headers)?;
        let outcome = self.transfer.perform(&request)?;
        Ok(Response::new(outcome.info, outcome.body))
    }

    /// Execute a GET request
    pub fn get(&self, url: &str) -> Result<Response> {
        self.request(url, Options::new(), std::iter::empty::<&str>())
    }

    /// Execute a GET request with extra header lines
    pub fn get_with_headers<H, S>(&self, url: &str, headers: H) -> Result<Response>
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.request(url, Options::new(), headers)
    }

    /// Execute a POST request
    pub fn post(&self, url: &str, payload: impl Into<Payload>) -> Result<Response> {
        self.post_with_headers(url, payload, std::iter::empty::<&str>())
    }

    /// Execute a POST request with extra header lines
    pub fn post_with_headers<H, S>(
        &self,
        url: &str,
        payload: impl Into<Payload>,
        headers: H,
    ) -> Result<Response>
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = Options::from([
            TransferOption::Method(Method::POST),
            TransferOption::Body(payload.into()),
        ]);
        self.request(url, options, headers)
    }
}
