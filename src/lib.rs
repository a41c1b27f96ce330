//! Practice Docs MCP Server Library
//!
//! This crate serves a fixed catalog of best-practice documentation topics
//! over the Model Context Protocol. Each topic is reachable two ways that
//! always agree: the `get_docs` tool and the `practice://<topic>` resource.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the logging capability, the
//!   storage containment guard, the server and its transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **topics**: Catalog, input validation, loading and the error taxonomy
//!   - **tools**: The `get_docs` tool
//!   - **resources**: Resource listing and URI mapping
//!
//! # Example
//!
//! ```rust,no_run
//! use practice_docs_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let result = server.get_docs("react").await;
//!     assert!(!result.is_error.unwrap_or(false));
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::topics::{Topic, TopicError};
