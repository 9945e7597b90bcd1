//! 请求适配器：附加请求头、编解码 JSON、按状态码分类错误。
//!
//! The shared request adapter every product client delegates to.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{debug, warn};

use super::{HttpCapability, Method, RawRequest, RawResponse, ReqwestTransport};
use crate::config::HttpConfig;
use crate::{Error, JsonObject, Result};

/// `User-Agent` sent with every request.
pub static USER_AGENT: Lazy<String> = Lazy::new(|| format!("kaizen-rust/{}", crate::SDK_VERSION));

/// JSON-over-HTTP adapter.
///
/// Holds the connection settings and a handle to the transport capability.
/// Settings can be changed through the setters at any time; each request
/// works from the snapshot it loaded when it started, so a request already in
/// flight keeps the old key or URL. Callers that need every request to see a
/// change must sequence the change before issuing the requests.
pub struct HttpClient {
    config: ArcSwap<HttpConfig>,
    transport: Arc<dyn HttpCapability>,
}

impl HttpClient {
    /// Adapter over the default reqwest transport.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let transport = ReqwestTransport::new()
            .map_err(|e| Error::api(format!("Failed to create HTTP client: {}", e), None))?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Adapter over a caller-supplied transport.
    pub fn with_transport(config: HttpConfig, transport: Arc<dyn HttpCapability>) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            transport,
        }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<HttpConfig> {
        self.config.load_full()
    }

    pub fn set_api_key(&self, key: impl Into<String>) {
        let key = key.into();
        self.config.rcu(|current| HttpConfig {
            api_key: key.clone(),
            ..HttpConfig::clone(current)
        });
    }

    pub fn set_base_url(&self, url: impl Into<String>) {
        let url = url.into();
        self.config.rcu(|current| {
            HttpConfig::new(url.clone(), current.api_key.clone(), current.timeout)
        });
    }

    pub fn set_timeout(&self, timeout: Duration) {
        self.config.rcu(|current| HttpConfig {
            timeout,
            ..HttpConfig::clone(current)
        });
    }

    pub async fn get(&self, path: &str) -> Result<JsonObject> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<JsonObject> {
        self.request(Method::Post, path, Some(body)).await
    }

    /// Perform one request and return the decoded JSON object.
    ///
    /// Fails with [`Error::Authentication`] on 401, [`Error::RateLimit`] on
    /// 429, and [`Error::Api`] on any other status >= 400 or on a transport
    /// failure. A body that is not a JSON object never fails decoding; see
    /// [`decode_body`].
    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<JsonObject> {
        let config = self.config.load_full();
        let url = format!("{}{}", config.base_url, path);

        let mut headers = vec![("User-Agent".to_string(), USER_AGENT.to_string())];
        if method != Method::Get {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if config.has_api_key() {
            headers.push((
                "Authorization".to_string(),
                format!("Bearer {}", config.api_key),
            ));
        }

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(Error::serialization)?;

        debug!(method = method.as_str(), path, "kaizen request");

        let request = RawRequest {
            method,
            url,
            headers,
            body,
            timeout: config.timeout,
        };
        let response = self.transport.send(request).await.map_err(|e| {
            warn!(method = method.as_str(), path, error = %e, "kaizen request failed before a response");
            Error::api(format!("Request failed: {}", e), None)
        })?;

        debug!(method = method.as_str(), path, status = response.status, "kaizen response");

        classify_response(response).map_err(|e| {
            warn!(
                method = method.as_str(),
                path,
                status = e.status(),
                code = e.code(),
                request_id = e.request_id(),
                "kaizen request rejected"
            );
            e
        })
    }
}

/// Turn a raw response into the decoded body or a classified error.
///
/// Precedence: 401, then 429, then any other status >= 400.
pub(crate) fn classify_response(response: RawResponse) -> Result<JsonObject> {
    let data = decode_body(&response.body);
    if response.status < 400 {
        return Ok(data);
    }

    let request_id = response.header("X-Request-ID").map(str::to_string);
    let message = error_message(&data);

    let err = match response.status {
        401 => Error::authentication(message),
        429 => {
            let retry_after = response
                .header("Retry-After")
                .and_then(|v| v.parse::<u64>().ok());
            Error::rate_limit(message, retry_after)
        }
        status => Error::api(message, Some(status)),
    };
    Err(err.with_request_id(request_id))
}

/// Decode a response body into a JSON object without ever failing.
///
/// - a JSON object is returned as-is
/// - any other JSON value becomes `{}`
/// - unparsable text becomes `{"error": <trimmed text>}`, or `{}` when blank
pub fn decode_body(body: &str) -> JsonObject {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(_) => JsonObject::new(),
        Err(_) => {
            let mut map = JsonObject::new();
            let text = body.trim();
            if !text.is_empty() {
                map.insert("error".to_string(), Value::String(text.to_string()));
            }
            map
        }
    }
}

fn error_message(data: &JsonObject) -> String {
    match data.get("error") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(v) if is_truthy(v) => v.to_string(),
        _ => "Request failed".to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn decode_object_body() {
        let data = decode_body(r#"{"sql":"select 1"}"#);
        assert_eq!(data["sql"], "select 1");
    }

    #[test]
    fn decode_non_object_json_is_empty() {
        assert!(decode_body("[1,2,3]").is_empty());
        assert!(decode_body("42").is_empty());
        assert!(decode_body("\"text\"").is_empty());
    }

    #[test]
    fn decode_text_body_becomes_error_field() {
        let data = decode_body("  Bad Gateway \n");
        assert_eq!(data["error"], "Bad Gateway");
    }

    #[test]
    fn decode_blank_body_is_empty() {
        assert!(decode_body("").is_empty());
        assert!(decode_body("   ").is_empty());
    }

    #[test]
    fn success_returns_body_as_is() {
        let data = classify_response(RawResponse::new(200, r#"{"status":"ok"}"#)).unwrap();
        assert_eq!(data["status"], "ok");

        let data = classify_response(RawResponse::new(302, "")).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn status_401_is_authentication() {
        let err = classify_response(RawResponse::new(401, r#"{"error":"bad key"}"#)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.message(), "bad key");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn status_429_reads_retry_after() {
        let resp = RawResponse::new(429, r#"{"error":"slow down"}"#).with_header("Retry-After", "30");
        let err = classify_response(resp).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimit);
        assert_eq!(err.retry_after(), Some(30));

        let err = classify_response(RawResponse::new(429, "{}")).unwrap_err();
        assert_eq!(err.retry_after(), None);
        assert_eq!(err.message(), "Request failed");
    }

    #[test]
    fn non_numeric_retry_after_is_absent() {
        let resp = RawResponse::new(429, "{}")
            .with_header("Retry-After", "Wed, 21 Oct 2015 07:28:00 GMT");
        let err = classify_response(resp).unwrap_err();
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn other_errors_keep_status_and_request_id() {
        let resp = RawResponse::new(503, "upstream unavailable").with_header("x-request-id", "req-9");
        let err = classify_response(resp).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.message(), "upstream unavailable");
        assert_eq!(err.request_id(), Some("req-9"));
    }

    #[test]
    fn structured_error_field_is_rendered() {
        let resp = RawResponse::new(400, r#"{"error":{"reason":"bad"}}"#);
        let err = classify_response(resp).unwrap_err();
        assert_eq!(err.message(), r#"{"reason":"bad"}"#);

        let resp = RawResponse::new(400, r#"{"error":""}"#);
        assert_eq!(classify_response(resp).unwrap_err().message(), "Request failed");
    }
}
