// Error types for mcp-deepl
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeepLError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("DeepL authorization failed: {0}")]
    Auth(String),

    #[error("DeepL quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("DeepL rate limit reached: {0}")]
    RateLimited(String),

    #[error("Document not ready: {0}")]
    DocumentNotReady(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("DeepL API error {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DeepLError {
    /// Stable tag reported to tool callers alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            DeepLError::InvalidParameter(_) => "invalid_parameter",
            DeepLError::Auth(_) => "provider_auth_error",
            DeepLError::QuotaExceeded(_) => "provider_quota_exceeded",
            DeepLError::NotFound(_) => "provider_not_found",
            DeepLError::RateLimited(_) => "provider_rate_limited",
            DeepLError::DocumentNotReady(_) => "document_not_ready",
            DeepLError::Network(_) => "network_error",
            DeepLError::Provider { .. } => "unknown_provider_error",
            DeepLError::Config(_) | DeepLError::ConfigParsing(_) => "configuration_error",
            DeepLError::Io(_) => "io_error",
            DeepLError::Unauthorized(_) => "unauthorized",
            DeepLError::Internal(_) => "internal_error",
        }
    }

    /// Upstream HTTP status, when the error came from a DeepL response.
    pub fn status(&self) -> Option<u16> {
        match self {
            DeepLError::Auth(_) => Some(403),
            DeepLError::QuotaExceeded(_) => Some(456),
            DeepLError::NotFound(_) => Some(404),
            DeepLError::RateLimited(_) => Some(429),
            DeepLError::DocumentNotReady(_) => Some(503),
            DeepLError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Map a non-success DeepL response onto the error taxonomy.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => DeepLError::Auth(message),
            404 => DeepLError::NotFound(message),
            429 => DeepLError::RateLimited(message),
            456 => DeepLError::QuotaExceeded(message),
            _ => DeepLError::Provider { status, message },
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            kind: self.kind().to_string(),
            message: self.to_string(),
            status: self.status(),
        }
    }
}

impl From<reqwest::Error> for DeepLError {
    fn from(e: reqwest::Error) -> Self {
        DeepLError::Network(e.to_string())
    }
}

/// Structured error body returned to tool callers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorPayload {
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

// Convert DeepLError to HTTP responses for Axum
impl IntoResponse for DeepLError {
    fn into_response(self) -> Response {
        let status = match self {
            DeepLError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DeepLError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            DeepLError::Config(_) | DeepLError::ConfigParsing(_) | DeepLError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_GATEWAY,
        };

        let body = json!({
            "type": "error",
            "error": self.to_payload(),
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DeepLError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DeepLError::from_status(403, "x".into()).kind(), "provider_auth_error");
        assert_eq!(DeepLError::from_status(401, "x".into()).kind(), "provider_auth_error");
        assert_eq!(DeepLError::from_status(456, "x".into()).kind(), "provider_quota_exceeded");
        assert_eq!(DeepLError::from_status(429, "x".into()).kind(), "provider_rate_limited");
        assert_eq!(DeepLError::from_status(404, "x".into()).kind(), "provider_not_found");
        assert_eq!(DeepLError::from_status(500, "x".into()).kind(), "unknown_provider_error");
    }

    #[test]
    fn test_payload_keeps_provider_message() {
        let err = DeepLError::from_status(400, "Value for 'target_lang' not supported.".into());
        let payload = err.to_payload();
        assert_eq!(payload.status, Some(400));
        assert!(payload.message.contains("target_lang"));
    }
}
