//! Documentation lookup tool definition.
//!
//! Returns the markdown document for one catalog topic.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, ResourceContents, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::resources::to_uri;
use crate::domains::topics::{MARKDOWN_MIME_TYPE, Topic, TopicError, TopicService};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the documentation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDocsParams {
    /// Topic key, case-insensitive (e.g. "react").
    pub topic: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Documentation tool - returns the best-practice document for a topic.
pub struct GetDocsTool;

impl GetDocsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_docs";

    /// Returned for any argument shape that does not carry a string `topic`.
    /// Deserializer detail is not echoed, since it can quote caller input.
    pub const INVALID_ARGUMENTS: &'static str = "Missing or invalid 'topic' parameter";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get best-practice documentation for a topic. Returns the markdown document verbatim.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(topic_length = params.topic.len()))]
    pub async fn execute(params: &GetDocsParams, topics: &TopicService) -> CallToolResult {
        info!("Documentation tool called");

        match topics.fetch(&params.topic).await {
            Ok(document) => {
                info!(topic = %document.topic, "Documentation served");
                CallToolResult::success(vec![Content::resource(
                    ResourceContents::TextResourceContents {
                        uri: to_uri(document.topic),
                        mime_type: Some(MARKDOWN_MIME_TYPE.to_string()),
                        text: document.content,
                        meta: None,
                    },
                )])
            }
            Err(e) => {
                warn!(code = e.code(), "Documentation request failed");
                Self::failure(&e)
            }
        }
    }

    /// Render a topic error as a tool failure.
    pub fn failure(error: &TopicError) -> CallToolResult {
        CallToolResult::error(vec![Content::text(error.to_string())])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        topics: Arc<TopicService>,
    ) -> Result<serde_json::Value, String> {
        let params: GetDocsParams = serde_json::from_value(arguments)
            .map_err(|_| Self::INVALID_ARGUMENTS.to_string())?;

        info!("Documentation tool (HTTP) called");

        let result = Self::execute(&params, &topics).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Parse rmcp call arguments, hiding deserializer detail from the caller.
    fn parse_arguments(
        args: serde_json::Map<String, serde_json::Value>,
    ) -> Result<GetDocsParams, McpError> {
        serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
            warn!(error = %e, "Rejected get_docs arguments");
            McpError::invalid_params(Self::INVALID_ARGUMENTS, None)
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(
                format!(
                    "{} Valid topics: {}",
                    Self::DESCRIPTION,
                    Topic::keys().join(", ")
                )
                .into(),
            ),
            input_schema: cached_schema_for_type::<GetDocsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(topics: Arc<TopicService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let topics = topics.clone();
            async move {
                let params = Self::parse_arguments(args)?;
                Ok(Self::execute(&params, &topics).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
