// mcp-deepl - DeepL translation tools over the Model Context Protocol
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use mcp_deepl::adapter::DeepLAdapter;
use mcp_deepl::cli::Args;
use mcp_deepl::config::{AppConfig, Transport};
use mcp_deepl::deepl::DeepLClient;
use mcp_deepl::mcp::{stdio, McpHandler, ToolRegistry};
use mcp_deepl::server::create_router;
use mcp_deepl::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load .env and configuration
    dotenvy::dotenv().ok();
    let mut config = AppConfig::load()?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting mcp-deepl v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the DeepL client (a missing key is fatal here)
    let api_key = config.api_key()?;
    info!("Using DeepL API key {}", logging::mask_key(&api_key));
    let client = DeepLClient::new(api_key, &config.deepl)?;
    info!("DeepL endpoint: {}", client.base_url());

    // Phase 4: Wire adapter and tool dispatch
    let adapter = DeepLAdapter::new(Arc::new(client));
    let handler = McpHandler::new(ToolRegistry::new(adapter));

    // Phase 5: Serve the selected transport
    match config.server.transport {
        Transport::Stdio => stdio::serve_stdio(handler).await?,
        Transport::Http => {
            let app = create_router(&config.server, handler);
            let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

            info!("Starting HTTP transport on {}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            info!("Server shut down gracefully");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
