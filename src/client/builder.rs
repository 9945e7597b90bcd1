use std::sync::Arc;
use std::time::Duration;

use crate::client::core::KaizenClient;
use crate::config::{self, HttpConfig};
use crate::transport::{HttpCapability, HttpClient};
use crate::Result;

/// Builder for [`KaizenClient`].
///
/// Unset values fall back to the environment, then to the built-in defaults
/// (see [`crate::config`]).
#[derive(Default)]
pub struct KaizenClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpCapability>>,
}

impl KaizenClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bearer token. An empty key falls back to `KAIZEN_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the default reqwest transport, e.g. with a recording stub in tests.
    pub fn transport(mut self, transport: Arc<dyn HttpCapability>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// Fails with a validation error when the base URL is not an absolute
    /// http(s) URL, or with an API error when the default transport cannot be
    /// created.
    pub fn build(self) -> Result<KaizenClient> {
        let base_url = config::normalize_base_url(&config::resolve_base_url(self.base_url))?;
        let config = HttpConfig::new(
            base_url,
            config::resolve_api_key(self.api_key),
            config::resolve_timeout(self.timeout),
        );

        tracing::debug!(config = ?config, custom_transport = self.transport.is_some(), "building kaizen client");

        let http = match self.transport {
            Some(transport) => HttpClient::with_transport(config, transport),
            None => HttpClient::new(config)?,
        };
        Ok(KaizenClient::from_http(http))
    }
}
