//! Topics domain module.
//!
//! This module owns the documentation catalog and the retrieval pipeline
//! every request goes through:
//!
//! - `catalog.rs` - The fixed set of topics
//! - `validator.rs` - Normalizes and whitelists raw topic strings
//! - `loader.rs` - Reads content and classifies I/O failures
//! - `service.rs` - Composes validation, the path guard and the loader
//! - `error.rs` - Caller-safe error taxonomy shared by both surfaces
//!
//! The containment check itself lives in `core::security`.

mod catalog;
mod error;
mod loader;
mod service;
mod validator;

pub use catalog::Topic;
pub use error::{InvalidReason, TopicError};
pub use loader::ContentLoader;
pub use service::{MARKDOWN_MIME_TYPE, TopicDocument, TopicService};
pub use validator::{MAX_TOPIC_LENGTH, validate_topic};
