//! Topic service: validation, containment and loading in one pipeline.
//!
//! Both the tool surface and the resource surface call into the same
//! [`TopicService`], so a topic reads identically through either of them.

use std::path::Path;

use tracing::Level;

use super::catalog::Topic;
use super::error::TopicError;
use super::loader::ContentLoader;
use super::validator::validate_topic;
use crate::core::logging::SharedSink;
use crate::core::security::{PathGuard, StorageRootError};

/// MIME type of every topic document.
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// A successfully retrieved topic document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDocument {
    pub topic: Topic,
    pub content: String,
}

/// Service resolving caller requests to documentation content.
pub struct TopicService {
    guard: PathGuard,
    loader: ContentLoader,
    sink: SharedSink,
}

impl TopicService {
    /// Create a service serving documents from `docs_root`.
    pub fn new(docs_root: impl AsRef<Path>, sink: SharedSink) -> Result<Self, StorageRootError> {
        let guard = PathGuard::new(docs_root, sink.clone())?;
        sink.log(
            Level::INFO,
            "Documentation root configured",
            &[
                ("root", guard.root().display().to_string()),
                ("topics", Topic::ALL.len().to_string()),
            ],
        );

        Ok(Self {
            guard,
            loader: ContentLoader::new(sink.clone()),
            sink,
        })
    }

    /// The canonical documentation root.
    pub fn docs_root(&self) -> &Path {
        self.guard.root()
    }

    /// Fetch a topic from an untrusted request string.
    pub async fn fetch(&self, raw: &str) -> Result<TopicDocument, TopicError> {
        let topic = validate_topic(raw).inspect_err(|_| {
            self.sink.log(
                Level::INFO,
                "Rejected topic request",
                &[("length", raw.len().to_string())],
            );
        })?;
        self.fetch_topic(topic).await
    }

    /// Fetch an already validated topic.
    pub async fn fetch_topic(&self, topic: Topic) -> Result<TopicDocument, TopicError> {
        let location = self.guard.resolve(topic)?;
        let content = self.loader.load(&location).await?;
        Ok(TopicDocument { topic, content })
    }
}
