//! End-to-end tests of the reqwest transport against a mockito server.

mod common;

use common::MockServerFixture;
use kaizen::akuma::{QueryRequest, SqlDialect};
use kaizen::enzan::SummaryRequest;
use kaizen::sozo::GenerateRequest;
use kaizen::transport::ReqwestTransport;
use kaizen::ErrorKind;
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn sends_bearer_user_agent_and_json_body() {
    common::init_tracing();
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/akuma/query")
        .match_header("authorization", "Bearer sk-live")
        .match_header("content-type", "application/json")
        .match_header("user-agent", Matcher::Regex(r"^kaizen-rust/\d+\.\d+\.\d+$".to_string()))
        .match_body(Matcher::Json(json!({
            "dialect": "snowflake",
            "prompt": "revenue by month",
            "mode": "sql-only"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"sql":"SELECT date_trunc('month', paid_at), sum(amount) FROM payments GROUP BY 1"}"#)
        .create_async()
        .await;

    let client = fixture.client("sk-live");
    let resp = client
        .akuma()
        .query(&QueryRequest::new(SqlDialect::Snowflake, "revenue by month"))
        .await
        .unwrap();

    assert!(resp.sql.starts_with("SELECT date_trunc"));
    mock.assert_async().await;
}

#[tokio::test]
async fn no_authorization_header_without_key() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/health")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"status":"healthy","version":"1.4.2"}"#)
        .create_async()
        .await;

    let client = fixture.client("");
    client.set_api_key("");
    let health = client.health().await.unwrap();

    assert_eq!(health["status"], "healthy");
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("GET", "/v1/enzan/burn")
        .with_status(401)
        .with_header("x-request-id", "req-401")
        .with_body(r#"{"error":"bad key"}"#)
        .create_async()
        .await;

    let err = fixture.client("sk-wrong").enzan().burn().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.message(), "bad key");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.code(), Some("AUTH_ERROR"));
    assert_eq!(err.request_id(), Some("req-401"));
}

#[tokio::test]
async fn too_many_requests_reads_retry_after() {
    let mut fixture = MockServerFixture::new().await;
    let _limited = fixture
        .server
        .mock("POST", "/v1/enzan/summary")
        .with_status(429)
        .with_header("retry-after", "30")
        .with_body(r#"{"error":"Rate limit exceeded"}"#)
        .create_async()
        .await;

    let client = fixture.client("sk");
    let err = client.enzan().summary(&SummaryRequest::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert_eq!(err.retry_after(), Some(30));
    assert_eq!(err.status(), Some(429));
}

#[tokio::test]
async fn too_many_requests_without_retry_after() {
    let mut fixture = MockServerFixture::new().await;
    let _limited = fixture
        .server
        .mock("GET", "/v1/sozo/schemas")
        .with_status(429)
        .with_body("{}")
        .create_async()
        .await;

    let err = fixture.client("sk").sozo().list_schemas().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert_eq!(err.retry_after(), None);
    assert_eq!(err.message(), "Request failed");
}

#[tokio::test]
async fn plain_text_error_body_becomes_message() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/v1/sozo/generate")
        .with_status(502)
        .with_header("content-type", "text/plain")
        .with_body("Bad Gateway\n")
        .create_async()
        .await;

    let err = fixture
        .client("sk")
        .sozo()
        .generate(&GenerateRequest::new(10).schema_name("saas_customers_v1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.message(), "Bad Gateway");
    assert_eq!(err.request_id(), None);
}

#[tokio::test]
async fn non_object_success_body_decodes_to_empty() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("GET", "/v1/enzan/resources")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let resources = fixture.client("sk").enzan().list_resources().await.unwrap();
    assert!(resources.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_api_error_without_status() {
    let client = kaizen::KaizenClient::builder()
        .api_key("sk")
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client.health().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), None);
    assert!(err.message().starts_with("Request failed"));
}

#[tokio::test]
async fn base_url_change_applies_to_next_request() {
    let mut first = MockServerFixture::new().await;
    let mut second = MockServerFixture::new().await;
    let first_mock = first
        .server
        .mock("GET", "/health")
        .with_body(r#"{"server":"first"}"#)
        .create_async()
        .await;
    let second_mock = second
        .server
        .mock("GET", "/health")
        .with_body(r#"{"server":"second"}"#)
        .create_async()
        .await;

    let client = first.client("sk");
    assert_eq!(client.health().await.unwrap()["server"], "first");

    client.set_base_url(format!("{}/", second.base_url));
    assert_eq!(client.health().await.unwrap()["server"], "second");

    first_mock.assert_async().await;
    second_mock.assert_async().await;
}

#[tokio::test]
async fn silent_server_times_out_as_api_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client = kaizen::KaizenClient::builder()
        .api_key("sk")
        .base_url(format!("http://{}", addr))
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.enzan().burn().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), None);
    assert!(err.message().starts_with("Request failed"));

    server.abort();
}

#[tokio::test]
async fn caller_supplied_reqwest_client_is_used() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/v1/sozo/schemas")
        .match_header("x-tenant", "acme")
        .with_body(r#"{"schemas":[]}"#)
        .create_async()
        .await;

    let mut defaults = reqwest::header::HeaderMap::new();
    defaults.insert("x-tenant", reqwest::header::HeaderValue::from_static("acme"));
    let inner = reqwest::Client::builder()
        .default_headers(defaults)
        .build()
        .unwrap();

    let client = kaizen::KaizenClient::builder()
        .api_key("sk")
        .base_url(&fixture.base_url)
        .transport(Arc::new(ReqwestTransport::from_client(inner)))
        .build()
        .unwrap();

    assert!(client.sozo().list_schemas().await.unwrap().is_empty());
    mock.assert_async().await;
}
