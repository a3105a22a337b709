//! Configuration data structures for the mcp-deepl server.
//!
//! This module defines the schema for the application settings: transport
//! and HTTP binding, DeepL credentials and endpoint, and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Transport and HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream DeepL API settings.
    #[serde(default)]
    pub deepl: DeepLConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which MCP transport the process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout.
    #[default]
    Stdio,
    /// JSON-RPC over `POST /mcp`.
    Http,
}

/// Settings for the transport and the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport to serve.
    /// Default: `stdio`
    #[serde(default)]
    pub transport: Transport,

    /// The IP address or hostname the HTTP server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the HTTP server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bearer token required on `/mcp` when set.
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Settings for the upstream DeepL API connection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeepLConfig {
    /// API key. `DEEPL_API_KEY` takes precedence.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Overrides the endpoint otherwise derived from the key suffix.
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            host: default_host(),
            port: default_port(),
            auth_token: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
