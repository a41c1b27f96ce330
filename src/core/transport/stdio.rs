//! STDIO transport implementation.
//!
//! The default transport: one MCP session over the process's stdin/stdout.
//! Logs go to stderr so they never corrupt the protocol stream.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            server = server.name(),
            docs_root = %server.topics().docs_root().display(),
            "Ready - communicating via stdin/stdout"
        );

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!(?reason, "STDIO session closed");
        Ok(())
    }
}
