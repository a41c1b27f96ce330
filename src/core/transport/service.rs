//! Picks the configured transport and hands it the documentation server.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an [`McpServer`] on the transport chosen by `MCP_TRANSPORT`.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve `server` until the transport shuts down.
    ///
    /// Every transport shares the same server, so the tool and resource
    /// surfaces behave identically whichever one is selected.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            transport = %self.config.description(),
            topics = crate::domains::topics::Topic::ALL.len(),
            "Starting documentation transport"
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => TcpTransport::new(cfg).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_service_uses_stdio() {
        let service = TransportService::new(TransportConfig::default());
        assert!(service.config().is_stdio());
        assert_eq!(service.config().description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "tcp")]
    #[tokio::test]
    async fn test_tcp_bind_failure_surfaces() {
        use crate::core::transport::{TcpConfig, TransportError};
        use crate::core::{Config, MemorySink};

        let dir = tempfile::TempDir::new().unwrap();
        let server =
            McpServer::with_sink(Config::with_docs_root(dir.path()), MemorySink::new()).unwrap();
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let service = TransportService::new(TransportConfig::Tcp(TcpConfig {
            port,
            host: "127.0.0.1".to_string(),
        }));
        let err = service.run(server).await.unwrap_err();
        assert!(matches!(err, TransportError::BindError { .. }));
    }
}
