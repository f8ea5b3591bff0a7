// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transfer primitive
//!
//! [`HttpClient`](super::HttpClient) never touches sockets. It resolves a
//! [`Request`] and hands it to a [`Transfer`], which executes it once and
//! reports the body plus transfer metadata.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT_ENCODING, CONTENT_TYPE, COOKIE, REFERER};
use reqwest::redirect::Policy;
use reqwest::{Method, Proxy, StatusCode};

use super::request::Request;
use super::response::{info_keys, Info};
use crate::error::{Error, Result};

/// Executes one resolved request synchronously
pub trait Transfer {
    fn perform(&self, request: &Request) -> Result<TransferOutcome>;
}

impl<T: Transfer + ?Sized> Transfer for &T {
    fn perform(&self, request: &Request) -> Result<TransferOutcome> {
        (**self).perform(request)
    }
}

/// Raw result of a transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    /// Transfer metadata
    pub info: Info,
    /// Response body, decoded according to the accepted encoding
    pub body: Bytes,
}

/// Redirects the client actually followed during one transfer
#[derive(Debug, Default)]
struct RedirectTrace {
    hops: AtomicUsize,
    /// A 301/302/303 turned a non-GET/HEAD request into a GET
    downgraded: AtomicBool,
}

impl RedirectTrace {
    fn record(&self, status: StatusCode, method: &Method) {
        self.hops.fetch_add(1, Ordering::Relaxed);
        let rewrites = matches!(
            status,
            StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::SEE_OTHER
        );
        if rewrites && *method != Method::GET && *method != Method::HEAD {
            self.downgraded.store(true, Ordering::Relaxed);
        }
    }

    fn hops(&self) -> usize {
        self.hops.load(Ordering::Relaxed)
    }

    /// Method of the last request sent
    fn effective_method(&self, original: &Method) -> Method {
        if self.downgraded.load(Ordering::Relaxed) {
            Method::GET
        } else {
            original.clone()
        }
    }
}

/// Limit applied when following redirects without an explicit maximum
const DEFAULT_REDIRECT_LIMIT: usize = 10;

/// [`Transfer`] backed by a blocking reqwest client.
///
/// A fresh client is built for every call so per-request settings
/// (timeout, redirect policy, decoders, proxy) never leak between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransfer;

impl ReqwestTransfer {
    pub fn new() -> Self {
        Self
    }

    fn build_client(request: &Request, trace: Arc<RedirectTrace>) -> Result<Client> {
        let redirect = if !request.follow_location {
            Policy::none()
        } else {
            let max = request.max_redirects.unwrap_or(DEFAULT_REDIRECT_LIMIT);
            let method = request.method.clone();
            Policy::custom(move |attempt| {
                if attempt.previous().len() >= max {
                    attempt.error("too many redirects")
                } else {
                    trace.record(attempt.status(), &method);
                    attempt.follow()
                }
            })
        };

        let mut builder = Client::builder()
            .user_agent(&request.user_agent)
            .timeout(request.timeout)
            .redirect(redirect)
            .gzip(request.encoding.gzip())
            .deflate(request.encoding.deflate())
            .brotli(request.encoding.brotli())
            .danger_accept_invalid_certs(!request.verify_peer);

        if let Some(timeout) = request.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        if let Some(ref proxy_url) = request.proxy {
            builder = builder.proxy(
                Proxy::all(proxy_url)
                    .map_err(|e| Error::config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        Ok(builder.build()?)
    }

    fn transfer_error(err: reqwest::Error, request: &Request, elapsed: Duration) -> Error {
        if err.is_timeout() {
            let limit = request.timeout.unwrap_or(elapsed);
            Error::timeout(limit.as_millis() as u64, request.url_str())
        } else {
            Error::Http(err)
        }
    }
}

impl Transfer for ReqwestTransfer {
    fn perform(&self, request: &Request) -> Result<TransferOutcome> {
        let mut headers = request.headers.to_header_map()?;

        if let Some(accept) = request.encoding.accept_header() {
            if !headers.contains_key(ACCEPT_ENCODING) {
                headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(accept));
            }
        }
        if let Some(ref referer) = request.referer {
            let value = HeaderValue::from_str(referer)
                .map_err(|e| Error::invalid_header(format!("Referer: {}", referer), e.to_string()))?;
            headers.insert(REFERER, value);
        }
        if let Some(ref cookie) = request.cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| Error::invalid_header(format!("Cookie: {}", cookie), e.to_string()))?;
            headers.insert(COOKIE, value);
        }
        if request.body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
        }

        // The client is dropped on every path out of this function.
        let trace = Arc::new(RedirectTrace::default());
        let client = Self::build_client(request, Arc::clone(&trace))?;

        let mut builder = client
            .request(request.method.clone(), request.url.clone())
            .headers(headers);

        if let Some(ref payload) = request.body {
            builder = builder.body(payload.encode());
        }

        if let Some((ref username, ref password)) = request.basic_auth {
            builder = builder.basic_auth(username, password.as_ref());
        }

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            headers = request.headers.len(),
            follow = request.follow_location,
            "Sending request"
        );

        let start = Instant::now();
        let response = builder.send().map_err(|e| {
            let err = Self::transfer_error(e, request, start.elapsed());
            tracing::warn!(url = %request.url, error = %err, "Transfer failed");
            err
        })?;

        let status = response.status();
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let content_length = response.content_length();
        let remote_addr = response.remote_addr();
        let version = response.version();

        let body = response.bytes().map_err(|e| {
            let err = Self::transfer_error(e, request, start.elapsed());
            tracing::warn!(url = %request.url, error = %err, "Reading body failed");
            err
        })?;
        let elapsed = start.elapsed();

        let mut info = Info::new();
        info.insert(info_keys::URL.into(), final_url.as_str().into());
        info.insert(info_keys::HTTP_CODE.into(), status.as_u16().into());
        if let Some(content_type) = content_type {
            info.insert(info_keys::CONTENT_TYPE.into(), content_type.into());
        }
        info.insert(info_keys::SIZE_DOWNLOAD.into(), (body.len() as i64).into());
        info.insert(
            info_keys::DOWNLOAD_CONTENT_LENGTH.into(),
            content_length.map_or(-1, |len| len as i64).into(),
        );
        info.insert(info_keys::TOTAL_TIME.into(), elapsed.as_secs_f64().into());
        let hops = trace.hops();
        info.insert(info_keys::REDIRECT_COUNT.into(), (hops as i64).into());
        info.insert(info_keys::REDIRECTED.into(), i64::from(hops > 0).into());
        info.insert(info_keys::HTTP_VERSION.into(), format!("{:?}", version).into());
        if let Some(addr) = remote_addr {
            info.insert(info_keys::PRIMARY_IP.into(), addr.ip().to_string().into());
            info.insert(info_keys::PRIMARY_PORT.into(), i64::from(addr.port()).into());
        }
        info.insert(
            info_keys::EFFECTIVE_METHOD.into(),
            trace.effective_method(&request.method).as_str().into(),
        );

        tracing::debug!(
            status = status.as_u16(),
            size = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            url = %final_url,
            "Received response"
        );

        Ok(TransferOutcome { info, body })
    }
}
