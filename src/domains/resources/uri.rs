//! Mapping between topics and `practice://` resource URIs.

use crate::domains::topics::{Topic, validate_topic};

/// The URI scheme for documentation resources.
pub const SCHEME: &str = "practice";

/// URI template advertised for topic resources.
pub const URI_TEMPLATE: &str = "practice://{topic}";

/// Creates the URI for a topic.
pub fn to_uri(topic: Topic) -> String {
    format!("{}://{}", SCHEME, topic.key())
}

/// Parses a resource URI and returns its topic.
///
/// The scheme must match exactly and be followed by a single non-empty
/// segment. That segment goes through the same validation as a tool
/// request. Returns `None` for anything else.
pub fn parse_uri(uri: &str) -> Option<Topic> {
    let segment = uri.strip_prefix(SCHEME)?.strip_prefix("://")?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    validate_topic(segment).ok()
}
