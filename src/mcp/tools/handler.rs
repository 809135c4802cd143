//! Tool handler trait and common types

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for MCP tool implementations
///
/// Each tool (search, fetch) implements this trait to provide
/// schema and execution logic.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name (e.g., "search")
    fn name(&self) -> &str;

    /// Tool schema for tools/list
    fn schema(&self) -> ToolSchema;

    /// Execute tool with arguments
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Helper function to create a text content block
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
    }
}
