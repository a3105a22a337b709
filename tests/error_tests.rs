// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use mcp_deepl::error::DeepLError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        DeepLError::InvalidParameter("target_lang is required".to_string()),
        DeepLError::Auth("Wrong key".to_string()),
        DeepLError::QuotaExceeded("Quota exceeded".to_string()),
        DeepLError::NotFound("Glossary not found".to_string()),
        DeepLError::RateLimited("Too many requests".to_string()),
        DeepLError::DocumentNotReady("Still translating".to_string()),
        DeepLError::Network("Connection refused".to_string()),
        DeepLError::Config("DEEPL_API_KEY is not set".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_every_provider_status_has_a_kind() {
    let cases = [
        (401, "provider_auth_error"),
        (403, "provider_auth_error"),
        (404, "provider_not_found"),
        (429, "provider_rate_limited"),
        (456, "provider_quota_exceeded"),
        (400, "unknown_provider_error"),
        (500, "unknown_provider_error"),
        (503, "unknown_provider_error"),
    ];

    for (status, kind) in cases {
        assert_eq!(DeepLError::from_status(status, "x".to_string()).kind(), kind, "status {}", status);
    }
}

#[test]
fn test_provider_message_is_preserved() {
    let error = DeepLError::from_status(456, "Quota for this billing period has been exceeded".to_string());
    assert!(format!("{}", error).contains("Quota for this billing period"));
    assert_eq!(error.status(), Some(456));
}

#[test]
fn test_local_errors_have_no_status() {
    assert_eq!(DeepLError::InvalidParameter("x".to_string()).status(), None);
    assert_eq!(DeepLError::Network("x".to_string()).status(), None);
}

#[test]
fn test_payload_serialization() {
    let payload = DeepLError::NotFound("Glossary not found".to_string()).to_payload();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["kind"], "provider_not_found");
    assert_eq!(json["status"], 404);

    let local = serde_json::to_value(DeepLError::InvalidParameter("x".to_string()).to_payload()).unwrap();
    assert!(local.get("status").is_none());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: DeepLError = io.into();
    assert_eq!(error.kind(), "io_error");
}

#[test]
fn test_http_status_mapping() {
    let unauthorized = DeepLError::Unauthorized("bad token".to_string()).into_response();
    assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

    let invalid = DeepLError::InvalidParameter("x".to_string()).into_response();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    let upstream = DeepLError::QuotaExceeded("x".to_string()).into_response();
    assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
}
