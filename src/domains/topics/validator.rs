//! Input validation for caller-supplied topic strings.

use super::catalog::Topic;
use super::error::{InvalidReason, TopicError};

/// Longest topic string accepted, in bytes.
pub const MAX_TOPIC_LENGTH: usize = 50;

/// Validate a raw topic string against the catalog.
///
/// The length bound is checked before anything else. The input is then
/// folded to lowercase and must equal a catalog key exactly.
pub fn validate_topic(raw: &str) -> Result<Topic, TopicError> {
    if raw.len() > MAX_TOPIC_LENGTH {
        return Err(TopicError::invalid(InvalidReason::TooLong {
            max: MAX_TOPIC_LENGTH,
        }));
    }

    if raw.is_empty() {
        return Err(TopicError::invalid(InvalidReason::Empty));
    }

    Topic::from_key(&raw.to_lowercase()).ok_or_else(|| TopicError::invalid(InvalidReason::Unknown))
}
