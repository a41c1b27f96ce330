//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP sockets. Every accepted connection
//! gets its own MCP session over a clone of the server; the clones share one
//! read-only topic service, so sessions never wait on each other.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_BACKOFF: std::time::Duration = std::time::Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the configured address and serve until the process exits.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            server = server.name(),
            docs_root = %server.topics().docs_root().display(),
            "Ready - listening on {} (JSON-RPC over TCP)",
            addr
        );

        Self::accept_loop(listener, server).await
    }

    /// Accept connections on `listener`, one session task per client.
    pub async fn accept_loop(listener: TcpListener, server: McpServer) -> TransportResult<()> {
        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!(%peer, "Failed to set TCP_NODELAY: {}", e);
            }

            let server = server.clone();
            tokio::spawn(async move {
                match Self::serve_connection(server, stream, peer).await {
                    Ok(()) => info!(%peer, "Client disconnected"),
                    Err(e) => warn!(%peer, "{}", e),
                }
            });
        }
    }

    /// Run one MCP session over `stream` until the client goes away.
    async fn serve_connection(
        server: McpServer,
        stream: TcpStream,
        peer: SocketAddr,
    ) -> TransportResult<()> {
        let name = server.name().to_string();
        let docs_root = server.topics().docs_root().display().to_string();

        let session = server
            .serve(stream)
            .await
            .map_err(|e| TransportError::session(peer, e.to_string()))?;

        info!(%peer, server = %name, docs_root = %docs_root, "Client connected, serving documentation");

        session
            .waiting()
            .await
            .map_err(|e| TransportError::session(peer, e.to_string()))?;

        Ok(())
    }
}
