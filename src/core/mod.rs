//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the logging capability, the
//! storage containment guard, server lifecycle management and transports.

pub mod config;
pub mod error;
pub mod logging;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::{EventSink, MemorySink, SharedSink, TracingSink};
pub use security::{PathGuard, ResolvedLocation, StorageRootError};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
