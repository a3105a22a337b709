// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::DeepLError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Require `Authorization: Bearer <token>` when an auth token is configured.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, DeepLError> {
    if let Some(expected) = state.auth_token.as_deref() {
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let authorized = provided.is_some_and(|token| tokens_match(token, expected));
        if !authorized {
            return Err(DeepLError::Unauthorized(
                "missing or invalid bearer token".to_string(),
            ));
        }
    }

    Ok(next.run(request).await)
}

/// Compare tokens without short-circuiting on the first differing byte.
fn tokens_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("secret", "secret"));
        assert!(!tokens_match("secreT", "secret"));
        assert!(!tokens_match("secret-longer", "secret"));
        assert!(!tokens_match("", "secret"));
    }
}
