//! Resource Registry - one resource per catalog topic.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

use super::uri::{URI_TEMPLATE, to_uri};
use crate::domains::topics::{MARKDOWN_MIME_TYPE, Topic};

/// Build the resource listing entry for a topic.
fn build_resource(topic: Topic) -> Resource {
    let mut raw = RawResource::new(to_uri(topic), topic.display_name());
    raw.description = Some(topic.description().to_string());
    raw.mime_type = Some(MARKDOWN_MIME_TYPE.to_string());
    raw.no_annotation()
}

/// Get all resources, in catalog order.
pub fn get_all_resources() -> Vec<Resource> {
    Topic::ALL.into_iter().map(build_resource).collect()
}

/// Get all resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: URI_TEMPLATE.to_string(),
            name: "Practice Documentation".to_string(),
            title: Some("Best Practice Topics".to_string()),
            description: Some(format!(
                "Read a documentation topic by key. Valid topics: {}",
                Topic::keys().join(", ")
            )),
            mime_type: Some(MARKDOWN_MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<String> {
    Topic::ALL.into_iter().map(to_uri).collect()
}
