//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::topics::TopicError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource URI is not of the form `practice://<topic>`.
    ///
    /// The offending URI is not echoed back to the caller.
    #[error("Invalid resource URI. Expected practice://<topic>")]
    InvalidUri,

    /// Retrieving the topic behind a valid URI failed.
    #[error(transparent)]
    Topic(#[from] TopicError),
}

impl ResourceError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUri => "INVALID_URI",
            Self::Topic(e) => e.code(),
        }
    }

    /// Convert into the protocol error sent to the client.
    pub fn to_mcp_error(&self) -> McpError {
        let message = self.to_string();
        let data = Some(serde_json::json!({ "code": self.code() }));
        match self {
            Self::InvalidUri => McpError::invalid_params(message, data),
            Self::Topic(TopicError::Invalid { .. }) => McpError::invalid_params(message, data),
            Self::Topic(TopicError::NotFound { .. }) => McpError::resource_not_found(message, data),
            Self::Topic(TopicError::AccessDenied) => McpError::invalid_request(message, data),
            Self::Topic(TopicError::ReadFailed) | Self::Topic(TopicError::Unexpected) => {
                McpError::internal_error(message, data)
            }
        }
    }
}
