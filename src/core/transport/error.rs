//! Transport error types.

use std::net::SocketAddr;

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors raised while exposing the documentation server on a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listen address could not be bound.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake on the STDIO stream failed.
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// One TCP client session failed; other sessions keep running.
    #[error("Session with {peer} failed: {message}")]
    SessionError { peer: SocketAddr, message: String },

    /// The HTTP server stopped with an error.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The STDIO session ended abnormally.
    #[error("Service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    pub fn session(peer: SocketAddr, message: impl Into<String>) -> Self {
        Self::SessionError {
            peer,
            message: message.into(),
        }
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::HttpError(msg.into())
    }
}
