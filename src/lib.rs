// mcp-deepl - DeepL translation tools over the Model Context Protocol
// Author: kelexine (https://github.com/kelexine)

pub mod adapter;
pub mod cli;
pub mod config;
pub mod deepl;
pub mod error;
pub mod mcp;
pub mod metrics;
pub mod models;
pub mod server;
pub mod utils;
