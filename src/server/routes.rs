// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{health_handler, mcp_handler, metrics_handler};
use super::middleware::{request_id_layers, require_bearer};
use crate::config::ServerConfig;
use crate::mcp::McpHandler;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Largest accepted JSON-RPC body. Documents travel by path, not in the body.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub handler: McpHandler,
    pub auth_token: Option<Arc<str>>,
}

pub fn create_router(config: &ServerConfig, handler: McpHandler) -> Router {
    let state = AppState {
        handler,
        auth_token: config
            .auth_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(Arc::from),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mcp_routes = Router::new()
        .route("/mcp", post(mcp_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .merge(mcp_routes)
        .layer(tower_http::limit::RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
