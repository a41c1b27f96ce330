//! Resource service implementation.
//!
//! Lists one resource per catalog topic and reads them through the shared
//! [`TopicService`], so a resource read and a tool call for the same topic
//! return identical text.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::sync::Arc;
use tracing::{info, warn};

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use super::uri::{parse_uri, to_uri};
use crate::domains::topics::{MARKDOWN_MIME_TYPE, TopicService};

/// Service for listing and reading documentation resources.
pub struct ResourceService {
    topics: Arc<TopicService>,

    /// Listing entries, in catalog order.
    resources: Vec<Resource>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService backed by `topics`.
    pub fn new(topics: Arc<TopicService>) -> Self {
        info!("Initializing ResourceService");

        Self {
            topics,
            resources: get_all_resources(),
            templates: get_all_resource_templates(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let Some(topic) = parse_uri(uri) else {
            warn!(uri_length = uri.len(), "Rejected malformed resource URI");
            return Err(ResourceError::InvalidUri);
        };

        let document = self.topics.fetch_topic(topic).await?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: to_uri(document.topic),
                mime_type: Some(MARKDOWN_MIME_TYPE.to_string()),
                text: document.content,
                meta: None,
            }],
        })
    }
}
