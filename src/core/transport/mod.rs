//! Transports that expose the documentation server.
//!
//! | Feature | Transport | Sessions |
//! |---|---|---|
//! | `stdio` (default) | [`stdio::StdioTransport`] | one, over stdin/stdout |
//! | `tcp` | [`tcp::TcpTransport`] | one per accepted connection |
//! | `http` | [`http::HttpTransport`] | stateless JSON-RPC over POST |
//!
//! All of them serve clones of one [`McpServer`](crate::core::McpServer), so
//! `get_docs` and `practice://` reads go through the same topic service on
//! every transport. `MCP_TRANSPORT` selects one at startup.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
