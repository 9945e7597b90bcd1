//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kaizen::{HttpCapability, KaizenClient, RawRequest, RawResponse, TransportError};
use mockito::{Server, ServerGuard};
use serde_json::Value;

/// Install a subscriber once so `RUST_LOG=kaizen=debug` shows request flow.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Transport stub that records every request and replays scripted responses.
///
/// When the script runs out, it answers `200 {}`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<RawRequest>>,
    responses: Mutex<VecDeque<RawResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replying(response: RawResponse) -> Arc<Self> {
        let transport = Self::new();
        transport.push(response);
        transport
    }

    pub fn replying_json(status: u16, body: Value) -> Arc<Self> {
        Self::replying(RawResponse::new(status, body.to_string()))
    }

    pub fn push(&self, response: RawResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RawRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> RawRequest {
        self.requests()
            .pop()
            .expect("transport received no request")
    }

    /// Body of the last request, parsed as JSON.
    pub fn last_body(&self) -> Value {
        let body = self.last().body.expect("last request had no body");
        serde_json::from_str(&body).expect("request body is not JSON")
    }
}

#[async_trait]
impl HttpCapability for RecordingTransport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(200, "{}")))
    }
}

/// Transport stub that always fails before a response arrives.
pub struct FailingTransport;

#[async_trait]
impl HttpCapability for FailingTransport {
    async fn send(&self, _request: RawRequest) -> Result<RawResponse, TransportError> {
        Err(TransportError::Other("connection refused".to_string()))
    }
}

/// Client wired to `transport` with a fixed key and base URL.
pub fn stub_client(transport: Arc<dyn HttpCapability>) -> KaizenClient {
    KaizenClient::builder()
        .api_key("sk-test")
        .base_url("https://api.test.local")
        .transport(transport)
        .build()
        .expect("failed to build stub client")
}

/// A mockito server plus a client using the real reqwest transport against it.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self, api_key: &str) -> KaizenClient {
        KaizenClient::builder()
            .api_key(api_key)
            .base_url(&self.base_url)
            .build()
            .expect("failed to build mock client")
    }
}
