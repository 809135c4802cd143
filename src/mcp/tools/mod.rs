//! MCP tool implementations
//!
//! This module contains the MCP tool handlers that expose the
//! student-assistant operations to MCP clients.

pub mod fetch;
pub mod handler;
pub mod registry;
pub mod search;

pub use fetch::FetchToolHandler;
pub use handler::{text_content, McpToolHandler};
pub use registry::ToolRegistry;
pub use search::SearchToolHandler;
