//! 传输层：可插拔的 HTTP 能力与共享的请求适配器。
//!
//! Transport layer.
//!
//! [`HttpCapability`] is the seam to the network: anything that can perform one
//! request/response round trip. [`ReqwestTransport`] is the default
//! implementation; tests plug in stubs. [`HttpClient`] sits on top and owns the
//! SDK's wire conventions (headers, JSON bodies, status classification).

mod client;
mod http;

pub use client::{decode_body, HttpClient, USER_AGENT};
pub use http::ReqwestTransport;

use async_trait::async_trait;
use std::time::Duration;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// An outgoing request described as plain data.
#[derive(Debug, Clone)]
pub struct RawRequest {
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// The capability must fail the call once this elapses.
    pub timeout: Duration,
}

impl RawRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }
}

/// A received response described as plain data.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup; blank values count as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }
}

fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

/// A pluggable HTTP round trip.
///
/// Implementations must be safe to share across tasks. Connection pooling,
/// TLS and socket-level concerns live entirely behind this trait.
#[async_trait]
pub trait HttpCapability: Send + Sync {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
