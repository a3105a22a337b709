//! Axum-based HTTP transport for the MCP server.
//!
//! # Components
//!
//! - `handlers`: `POST /mcp`, `GET /health` and `GET /metrics`.
//! - `middleware`: Request ID tracking and optional bearer authentication.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::HealthResponse;
pub use routes::{create_router, AppState};
