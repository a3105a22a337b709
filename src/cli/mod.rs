// CLI module for mcp-deepl
// Author: kelexine (https://github.com/kelexine)

use crate::config::{AppConfig, Transport};
use clap::Parser;

/// mcp-deepl - DeepL translation tools over the Model Context Protocol
#[derive(Parser, Debug)]
#[command(name = "mcp-deepl", version, about, long_about = None)]
pub struct Args {
    /// Transport to serve (overrides server.transport)
    #[arg(long, value_enum, env = "MCP_DEEPL_TRANSPORT")]
    pub transport: Option<Transport>,

    /// Address to bind the HTTP transport to
    #[arg(long)]
    pub host: Option<String>,

    /// Port for the HTTP transport
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(transport) = self.transport {
            config.server.transport = transport;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
