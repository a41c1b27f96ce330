//! Caller-safe error taxonomy for topic retrieval.
//!
//! The `Display` output of every variant is what callers see. None of the
//! variants carry storage paths or OS error detail; that information only
//! goes to the server-side log at the point where the failure is classified.

use std::fmt;
use thiserror::Error;

/// Why a raw topic string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The topic string was empty.
    Empty,

    /// The topic string was longer than the allowed maximum.
    TooLong { max: usize },

    /// The topic string is not a catalog key.
    Unknown,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("topic must not be empty"),
            Self::TooLong { max } => write!(f, "topic must be at most {} characters", max),
            Self::Unknown => f.write_str("unknown topic"),
        }
    }
}

/// Errors that can occur while resolving and loading a topic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    /// The request did not name a catalog topic.
    #[error("Invalid topic: {reason}. Valid topics: {}", .valid_topics.join(", "))]
    Invalid {
        reason: InvalidReason,
        valid_topics: Vec<&'static str>,
    },

    /// The topic is in the catalog but its content is missing.
    #[error("Documentation for topic '{topic}' not found")]
    NotFound { topic: String },

    /// The derived storage location failed the containment check.
    #[error("Access denied")]
    AccessDenied,

    /// Any other I/O failure while reading the content.
    #[error("An error occurred while reading the documentation")]
    ReadFailed,

    /// Anything not classified above.
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl TopicError {
    /// Create an "invalid" error listing the catalog keys.
    pub fn invalid(reason: InvalidReason) -> Self {
        Self::Invalid {
            reason,
            valid_topics: super::Topic::keys(),
        }
    }

    /// Create a "not found" error.
    pub fn not_found(topic: impl Into<String>) -> Self {
        Self::NotFound {
            topic: topic.into(),
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "INVALID_TOPIC",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::ReadFailed => "READ_ERROR",
            Self::Unexpected => "UNEXPECTED",
        }
    }
}
