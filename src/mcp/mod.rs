//! MCP (Model Context Protocol) server module
//!
//! This module implements a JSON-RPC 2.0 compliant MCP server that
//! exposes the student-assistant operations as MCP tools.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

// Re-export main types
pub use error::McpError;
pub use server::McpServer;
pub use tools::{McpToolHandler, ToolRegistry};
