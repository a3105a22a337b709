// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::mcp::handler::SERVER_NAME;
use crate::mcp::protocol::parse_message;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Liveness check with a fixed payload.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVER_NAME.to_string(),
    })
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}

/// Handler for `POST /mcp`: one JSON-RPC message per request.
///
/// Requests are answered with a JSON body; notifications and client
/// responses are acknowledged with `202 Accepted`.
pub async fn mcp_handler(State(state): State<AppState>, body: String) -> Response {
    let message = match parse_message(&body) {
        Ok(message) => message,
        Err(error_response) => {
            warn!("Rejected malformed MCP message");
            return (StatusCode::BAD_REQUEST, Json(error_response)).into_response();
        }
    };

    match state.handler.handle(message).await {
        Some(response) => Json(response).into_response(),
        None => {
            debug!("Accepted MCP notification");
            StatusCode::ACCEPTED.into_response()
        }
    }
}
