// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{DeepLError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Environment variable holding the DeepL authentication key.
pub const API_KEY_ENV: &str = "DEEPL_API_KEY";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied by the caller)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: MCP_DEEPL_, nesting: __)
            .add_source(
                Environment::with_prefix("MCP_DEEPL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DeepLError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DeepLError::Config(e.to_string()))
    }

    /// Resolve the DeepL API key, preferring `DEEPL_API_KEY` over the config file.
    ///
    /// A missing or blank key is a startup error; it is never deferred to a tool call.
    pub fn api_key(&self) -> Result<Zeroizing<String>> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        select_api_key(from_env, self.deepl.api_key.clone())
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mcp-deepl")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

fn select_api_key(from_env: Option<String>, from_config: Option<String>) -> Result<Zeroizing<String>> {
    from_env
        .into_iter()
        .chain(from_config)
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .map(Zeroizing::new)
        .ok_or_else(|| DeepLError::Config(format!("{} must be provided or set in environment", API_KEY_ENV)))
}
