//! Structured logging and secret redaction.
//!
//! This module configures the `tracing` ecosystem for the application and
//! provides a helper that keeps DeepL API keys out of log output.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{DeepLError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// DeepL keys are UUIDs, optionally with a `:fx` free-tier suffix.
static API_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}(:fx)?\b")
        .expect("API key pattern is valid")
});

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Logs always go to stderr; stdout carries the stdio transport. Log levels
/// are controlled via `RUST_LOG` or the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| DeepLError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| DeepLError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Replaces anything that looks like a DeepL API key with `[REDACTED_API_KEY]`.
pub fn sanitize(input: &str) -> String {
    API_KEY_PATTERN
        .replace_all(input, "[REDACTED_API_KEY]")
        .into_owned()
}

/// Shows only the last four characters of a key, for startup diagnostics.
pub fn mask_key(key: &str) -> String {
    let visible: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{}", visible)
}
