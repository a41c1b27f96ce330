//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, verifies the documentation
//! root and starts the server with the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use practice_docs_mcp_server::core::{Config, McpServer, TransportService, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if config.docs.from_env {
        info!("Documentation root set to {:?}", config.docs.root_path);
    } else {
        warn!(
            "MCP_DOCS_PATH not set - serving documentation from {:?}",
            config.docs.root_path
        );
    }

    let server = McpServer::new(config.clone()).with_context(|| {
        format!(
            "cannot serve documentation from {}",
            config.docs.root_path.display()
        )
    })?;

    info!(
        "Server initialized, serving documentation from {}",
        server.topics().docs_root().display()
    );

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP protocol in STDIO mode.
fn init_logging(config: &LoggingConfig) {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if config.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
