//! semsla - MCP server for the Semantic SLA document service
//!
//! This binary runs as an MCP server using stdio transport, so an MCP
//! client can log in, manage documents and run SLA checks through tools.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `SEMSLA_BASE_URL`: Base URL of the service
//! - `SEMSLA_TIMEOUT_SECS`: Request timeout in seconds (optional, default 1000)
//! - `SEMSLA_TOKEN`: Bearer token to start the session with (optional)
//!
//! # Usage
//!
//! ```bash
//! SEMSLA_BASE_URL=https://sla.example.com ./semsla
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use semsla::{client, config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Log to stderr: stdout carries MCP JSON-RPC messages
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("semsla=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting semsla MCP server v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    let client = client::SemslaClient::new(&config).context("Failed to create HTTP client")?;

    tracing::debug!(timeout = ?config.timeout, "Configuration loaded");
    client.log_session();

    let server = server::SemslaServer::new(client);

    tracing::info!("Starting stdio transport");

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    tracing::info!("Server running, waiting for requests");

    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
