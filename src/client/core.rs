use std::time::Duration;

use crate::akuma::AkumaClient;
use crate::client::builder::KaizenClientBuilder;
use crate::enzan::EnzanClient;
use crate::sozo::SozoClient;
use crate::transport::HttpClient;
use crate::{JsonObject, Result};

pub const HEALTH_PATH: &str = "/health";

/// Entry point to the Kaizen API.
///
/// One client owns one connection pool and one set of credentials. Product
/// views returned by [`akuma`](Self::akuma), [`enzan`](Self::enzan) and
/// [`sozo`](Self::sozo) borrow it and can be used from several tasks at once.
pub struct KaizenClient {
    http: HttpClient,
}

impl KaizenClient {
    pub fn builder() -> KaizenClientBuilder {
        KaizenClientBuilder::new()
    }

    /// Client configured entirely from the environment and defaults.
    pub fn from_env() -> Result<Self> {
        KaizenClientBuilder::new().build()
    }

    pub(crate) fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn akuma(&self) -> AkumaClient<'_> {
        AkumaClient::new(&self.http)
    }

    pub fn enzan(&self) -> EnzanClient<'_> {
        EnzanClient::new(&self.http)
    }

    pub fn sozo(&self) -> SozoClient<'_> {
        SozoClient::new(&self.http)
    }

    /// The shared request adapter.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Service health; the body is returned as-is.
    pub async fn health(&self) -> Result<JsonObject> {
        self.http.get(HEALTH_PATH).await
    }

    /// Replace the API key for subsequent requests.
    pub fn set_api_key(&self, key: impl Into<String>) {
        self.http.set_api_key(key);
    }

    /// Replace the base URL for subsequent requests. A trailing slash is
    /// stripped; the value is not otherwise validated.
    pub fn set_base_url(&self, url: impl Into<String>) {
        self.http.set_base_url(url);
    }

    pub fn set_timeout(&self, timeout: Duration) {
        self.http.set_timeout(timeout);
    }

    /// Release the connection pool. Dropping the client has the same effect.
    pub fn close(self) {
        tracing::debug!("closing kaizen client");
        drop(self);
    }
}

impl std::fmt::Debug for KaizenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KaizenClient")
            .field("config", &self.http.config())
            .finish()
    }
}
