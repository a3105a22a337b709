//! Utility functions and helpers for mcp-deepl.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and API key redaction.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
