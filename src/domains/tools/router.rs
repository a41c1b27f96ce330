//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::GetDocsTool;
use crate::domains::topics::TopicService;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(topics: Arc<TopicService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(GetDocsTool::create_route(topics))
}
