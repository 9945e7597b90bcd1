//! Connection settings shared by every request.
//!
//! Resolution order for each setting is: explicit value, then environment,
//! then the built-in default.
//!
//! | Setting | Environment variable | Default |
//! |---------|----------------------|---------|
//! | API key | `KAIZEN_API_KEY` | empty (no `Authorization` header) |
//! | Base URL | `KAIZEN_BASE_URL` | `https://api.kaizenaisystems.com` |
//! | Timeout | `KAIZEN_TIMEOUT_SECS` | 30 seconds |
//! | Proxy | `KAIZEN_PROXY_URL` | none |

use std::env;
use std::fmt;
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.kaizenaisystems.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_ENV: &str = "KAIZEN_API_KEY";
pub const BASE_URL_ENV: &str = "KAIZEN_BASE_URL";
pub const TIMEOUT_ENV: &str = "KAIZEN_TIMEOUT_SECS";
pub const PROXY_ENV: &str = "KAIZEN_PROXY_URL";

/// Per-adapter configuration: where to send requests, how to authenticate,
/// and how long to wait.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Base URL without a trailing slash; request paths are appended verbatim.
    pub base_url: String,
    /// Bearer token. Empty means no `Authorization` header is sent.
    pub api_key: String,
    pub timeout: Duration,
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: trim_base_url(&base_url.into()),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Configuration taken entirely from the environment and defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(&resolve_base_url(None))?,
            api_key: resolve_api_key(None),
            timeout: resolve_timeout(None),
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            "",
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

// Keeps the key out of logs.
impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<none>" })
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// An explicit non-empty key wins; otherwise `KAIZEN_API_KEY`; otherwise empty.
pub(crate) fn resolve_api_key(explicit: Option<String>) -> String {
    explicit
        .filter(|k| !k.is_empty())
        .or_else(|| env::var(API_KEY_ENV).ok())
        .unwrap_or_default()
}

pub(crate) fn resolve_base_url(explicit: Option<String>) -> String {
    explicit
        .or_else(|| {
            env::var(BASE_URL_ENV)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

pub(crate) fn resolve_timeout(explicit: Option<Duration>) -> Duration {
    explicit
        .or_else(|| {
            env::var(TIMEOUT_ENV)
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
        })
        .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

pub(crate) fn resolve_proxy() -> Option<String> {
    env::var(PROXY_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Check that `raw` is an absolute http(s) URL and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw.trim()).map_err(|e| {
        Error::validation(format!("Invalid base URL '{}': {}", raw, e), Some("base_url"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trim_base_url(raw)),
        other => Err(Error::validation(
            format!("Unsupported base URL scheme '{}'", other),
            Some("base_url"),
        )),
    }
}

fn trim_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
