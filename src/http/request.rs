// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Resolved request description and request payloads

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use reqwest::Method;
use url::form_urlencoded;
use url::Url;

use super::encoding::Encoding;
use super::header_list::HeaderList;
use super::options::TransferOption;
use super::DEFAULT_USER_AGENT;
use crate::error::Result;

/// Request body for POST-style requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Key/value pairs, form-urlencoded in order
    Form(Vec<(String, String)>),
    /// Pre-encoded body sent as-is
    Raw(String),
}

impl Payload {
    /// Build a form payload from key/value pairs
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Payload::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Encode the payload as the bytes put on the wire
    pub fn encode(&self) -> String {
        match self {
            Payload::Form(pairs) => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish(),
            Payload::Raw(body) => body.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Form(pairs) => pairs.is_empty(),
            Payload::Raw(body) => body.is_empty(),
        }
    }
}

impl From<&str> for Payload {
    fn from(body: &str) -> Self {
        Payload::Raw(body.to_string())
    }
}

impl From<String> for Payload {
    fn from(body: String) -> Self {
        Payload::Raw(body)
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Payload {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Payload::form(pairs)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Payload {
    fn from(pairs: [(K, V); N]) -> Self {
        Payload::form(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> From<HashMap<K, V>> for Payload {
    fn from(pairs: HashMap<K, V>) -> Self {
        Payload::form(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for Payload {
    fn from(pairs: BTreeMap<K, V>) -> Self {
        Payload::form(pairs)
    }
}

/// Fully resolved description of one transfer
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Header lines in send order
    pub headers: HeaderList,
    /// Request body
    pub body: Option<Payload>,
    /// Whole-transfer timeout (None = unlimited)
    pub timeout: Option<Duration>,
    /// Connection phase timeout
    pub connect_timeout: Option<Duration>,
    /// Follow redirects
    pub follow_location: bool,
    /// Redirect limit; only ever set while following redirects
    pub max_redirects: Option<usize>,
    /// User agent string
    pub user_agent: String,
    /// Accepted content encodings
    pub encoding: Encoding,
    /// Referer header
    pub referer: Option<String>,
    /// Cookie header
    pub cookie: Option<String>,
    /// Proxy URL
    pub proxy: Option<String>,
    /// Verify the peer certificate
    pub verify_peer: bool,
    /// Basic auth credentials
    pub basic_auth: Option<(String, Option<String>)>,
}

impl Request {
    /// Create a request with transfer defaults
    pub fn new(method: Method, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            method,
            url: Url::parse(url.as_ref())?,
            headers: HeaderList::new(),
            body: None,
            timeout: None,
            connect_timeout: None,
            follow_location: false,
            max_redirects: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            encoding: Encoding::default(),
            referer: None,
            cookie: None,
            proxy: None,
            verify_peer: true,
            basic_auth: None,
        })
    }

    /// Create a GET request
    pub fn get(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Create a POST request
    pub fn post(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::POST, url)
    }

    /// Apply one transfer option on top of the current settings.
    ///
    /// A body on a GET request turns it into a POST; an explicit method set
    /// before or after the body is kept.
    pub fn apply(&mut self, option: TransferOption) {
        match option {
            TransferOption::Method(method) => self.method = method,
            TransferOption::Body(payload) => {
                if self.method == Method::GET {
                    self.method = Method::POST;
                }
                self.body = Some(payload);
            }
            TransferOption::Headers(headers) => self.headers = headers,
            TransferOption::Timeout(timeout) => {
                self.timeout = (!timeout.is_zero()).then_some(timeout);
            }
            TransferOption::ConnectTimeout(timeout) => {
                self.connect_timeout = (!timeout.is_zero()).then_some(timeout);
            }
            TransferOption::FollowLocation(follow) => self.follow_location = follow,
            TransferOption::MaxRedirects(max) => self.max_redirects = Some(max),
            TransferOption::UserAgent(user_agent) => self.user_agent = user_agent,
            TransferOption::Encoding(encoding) => self.encoding = encoding,
            TransferOption::Referer(referer) => self.referer = Some(referer),
            TransferOption::Cookie(cookie) => self.cookie = Some(cookie),
            TransferOption::Proxy(proxy) => self.proxy = Some(proxy),
            TransferOption::VerifyPeer(verify) => self.verify_peer = verify,
            TransferOption::BasicAuth { username, password } => {
                self.basic_auth = Some((username, password));
            }
        }
    }

    /// Get the URL as string
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let req = Request::get("https://example.com/path").unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.host_str(), Some("example.com"));
        assert!(req.verify_peer);
        assert_eq!(req.max_redirects, None);
    }

    #[test]
    fn test_invalid_url() {
        assert!(Request::get("not a url").is_err());
    }

    #[test]
    fn test_body_promotes_get_to_post() {
        let mut req = Request::get("https://example.com").unwrap();
        req.apply(TransferOption::Body(Payload::from("a=1")));
        assert_eq!(req.method, Method::POST);

        let mut req = Request::get("https://example.com").unwrap();
        req.apply(TransferOption::Method(Method::PUT));
        req.apply(TransferOption::Body(Payload::from("a=1")));
        assert_eq!(req.method, Method::PUT);
    }

    #[test]
    fn test_zero_timeout_disables_limit() {
        let mut req = Request::get("https://example.com").unwrap();
        req.apply(TransferOption::Timeout(Duration::from_secs(3)));
        assert_eq!(req.timeout, Some(Duration::from_secs(3)));
        req.apply(TransferOption::Timeout(Duration::ZERO));
        assert_eq!(req.timeout, None);
    }

    #[test]
    fn test_form_payload_encoding() {
        let payload = Payload::from(vec![("q", "rust lang"), ("page", "2&3")]);
        assert_eq!(payload.encode(), "q=rust+lang&page=2%263");

        let raw = Payload::from("already=encoded");
        assert_eq!(raw.encode(), "already=encoded");
        assert!(Payload::form(Vec::<(String, String)>::new()).is_empty());
    }
}
