//! Model Context Protocol surface for the DeepL adapter.
//!
//! # Components
//!
//! - `protocol`: JSON-RPC 2.0 message types and MCP result shapes.
//! - `tools`: The tool registry: names, descriptions, input schemas and dispatch.
//! - `handler`: Transport-independent routing of MCP methods.
//! - `stdio`: The newline-delimited stdio transport.
//!
//! The HTTP transport lives in [`crate::server`] and reuses [`McpHandler`].
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod handler;
pub mod protocol;
pub mod stdio;
pub mod tools;

pub use handler::McpHandler;
pub use tools::{Tool, ToolRegistry};
