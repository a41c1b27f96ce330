//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! Both surfaces share one [`TopicService`]: the `get_docs` tool and the
//! `practice://` resources resolve a topic through exactly the same
//! validation, containment check and loader.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result as CoreResult;
use super::logging::{SharedSink, TracingSink};
use crate::domains::{
    resources::ResourceService,
    tools::{ToolRegistry, build_tool_router, definitions::GetDocsParams, definitions::GetDocsTool},
    topics::TopicService,
};

const INSTRUCTIONS: &str = "This server provides best-practice documentation. \
Call the `get_docs` tool with a topic, or read a `practice://<topic>` resource.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Retrieval pipeline shared by the tool and resource surfaces.
    topics: Arc<TopicService>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server that logs through `tracing`.
    ///
    /// Fails if the configured documentation root cannot be canonicalized.
    pub fn new(config: Config) -> CoreResult<Self> {
        Self::with_sink(config, TracingSink::shared())
    }

    /// Create a new MCP server with an explicit logging sink.
    pub fn with_sink(config: Config, sink: SharedSink) -> CoreResult<Self> {
        let config = Arc::new(config);
        let topics = Arc::new(TopicService::new(&config.docs.root_path, sink)?);
        let resource_service = Arc::new(ResourceService::new(topics.clone()));

        Ok(Self {
            tool_router: build_tool_router::<Self>(topics.clone()),
            config,
            topics,
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared topic service.
    pub fn topics(&self) -> &Arc<TopicService> {
        &self.topics
    }

    /// Run the `get_docs` tool directly, independent of any transport.
    pub async fn get_docs(&self, topic: &str) -> CallToolResult {
        let params = GetDocsParams {
            topic: topic.to_string(),
        };
        GetDocsTool::execute(&params, &self.topics).await
    }

    /// Read a documentation resource, mapping failures to protocol errors.
    pub async fn read_docs_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        self.resource_service.read_resource(uri).await.map_err(|e| {
            warn!(code = e.code(), "Resource read failed");
            e.to_mcp_error()
        })
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.topics.clone());
        registry
            .call_tool(name, arguments)
            .await
            .map_err(|e| e.to_string())
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> std::result::Result<serde_json::Value, McpError> {
        let result = self.read_docs_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.name().to_string();
        server_info.version = self.version().to_string();

        ServerInfo {
            server_info,
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!(uri_length = request.uri.len(), "Reading resource");
        self.read_docs_resource(&request.uri).await
    }
}
