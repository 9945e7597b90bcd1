//! 错误分类：所有 SDK 失败的结构化类型。
//!
//! Error taxonomy for the Kaizen SDK.
//!
//! Every failure surfaces as one [`Error`]. The variants form a small hierarchy
//! rooted at the generic API error: authentication, rate-limit and validation
//! failures are specialisations with a fixed status and machine-readable code.
//! Callers branch on [`Error::kind`] or match the variants directly; the
//! message text is for humans only.

use thiserror::Error;

/// Code attached to authentication failures.
pub const AUTH_ERROR_CODE: &str = "AUTH_ERROR";
/// Code attached to rate-limit failures.
pub const RATE_LIMIT_CODE: &str = "RATE_LIMIT";
/// Code attached to local validation failures.
pub const VALIDATION_ERROR_CODE: &str = "VALIDATION_ERROR";
/// Code attached when a response is missing a field the SDK cannot default.
pub const INVALID_RESPONSE_CODE: &str = "INVALID_RESPONSE";
/// Code attached when a request payload cannot be encoded.
pub const SERIALIZATION_ERROR_CODE: &str = "SERIALIZATION_ERROR";

/// Discriminant of an [`Error`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Api,
    Authentication,
    RateLimit,
    Validation,
}

/// Unified error type for the Kaizen SDK.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Generic API failure: transport errors (no status), non-2xx responses
    /// other than 401/429, and malformed responses.
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
        code: Option<String>,
        request_id: Option<String>,
    },

    /// The server rejected the credentials (HTTP 401).
    #[error("{message}")]
    Authentication {
        message: String,
        request_id: Option<String>,
    },

    /// The server throttled the caller (HTTP 429).
    #[error("{message}")]
    RateLimit {
        message: String,
        /// Seconds from the `Retry-After` header, if the server sent one.
        retry_after: Option<u64>,
        request_id: Option<String>,
    },

    /// A client-side precondition failed before anything was sent.
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
        request_id: Option<String>,
    },
}

impl Error {
    /// Generic API error with an optional HTTP status.
    pub fn api(message: impl Into<String>, status: Option<u16>) -> Self {
        Error::Api {
            message: message.into(),
            status,
            code: None,
            request_id: None,
        }
    }

    /// Authentication error; an empty message falls back to the default text.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: non_empty_or(message.into(), "Invalid or missing API key"),
            request_id: None,
        }
    }

    /// Rate-limit error; an empty message falls back to the default text.
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Error::RateLimit {
            message: non_empty_or(message.into(), "Rate limit exceeded"),
            retry_after,
            request_id: None,
        }
    }

    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Error::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            request_id: None,
        }
    }

    /// A response lacked a field the SDK treats as structurally required.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Error::Api {
            message: message.into(),
            status: None,
            code: Some(INVALID_RESPONSE_CODE.to_string()),
            request_id: None,
        }
    }

    pub(crate) fn serialization(err: serde_json::Error) -> Self {
        Error::Api {
            message: format!("Failed to encode request: {}", err),
            status: None,
            code: Some(SERIALIZATION_ERROR_CODE.to_string()),
            request_id: None,
        }
    }

    /// Attach the server-side correlation id.
    pub fn with_request_id(mut self, id: Option<String>) -> Self {
        match &mut self {
            Error::Api { request_id, .. }
            | Error::Authentication { request_id, .. }
            | Error::RateLimit { request_id, .. }
            | Error::Validation { request_id, .. } => *request_id = id,
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Api { .. } => ErrorKind::Api,
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::RateLimit { .. } => ErrorKind::RateLimit,
            Error::Validation { .. } => ErrorKind::Validation,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Api { message, .. }
            | Error::Authentication { message, .. }
            | Error::RateLimit { message, .. }
            | Error::Validation { message, .. } => message,
        }
    }

    /// HTTP status. Fixed for the specialised kinds; `None` for transport
    /// failures and local faults.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            Error::Authentication { .. } => Some(401),
            Error::RateLimit { .. } => Some(429),
            Error::Validation { .. } => Some(400),
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => code.as_deref(),
            Error::Authentication { .. } => Some(AUTH_ERROR_CODE),
            Error::RateLimit { .. } => Some(RATE_LIMIT_CODE),
            Error::Validation { .. } => Some(VALIDATION_ERROR_CODE),
        }
    }

    /// Value of the `X-Request-ID` response header, when the server sent one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Api { request_id, .. }
            | Error::Authentication { request_id, .. }
            | Error::RateLimit { request_id, .. }
            | Error::Validation { request_id, .. } => request_id.as_deref(),
        }
    }

    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Offending field of a validation error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
