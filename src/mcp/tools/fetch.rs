//! Fetch tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct FetchToolHandler {
    services: Arc<Services>,
}

impl FetchToolHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for FetchToolHandler {
    fn name(&self) -> &str {
        "fetch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "fetch".to_string(),
            description: "Fetch the full report for one student by id. \
                         Returns a JSON object with `id`, `title`, `data` (the report as the \
                         backend sent it), and `url`; failures return an object with an \
                         `error` field instead."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "student_id": {
                        "type": "string",
                        "description": "Student identifier as returned in search results",
                        "minLength": 1
                    }
                },
                "required": ["student_id"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct FetchArgs {
            student_id: String,
        }

        // Parse arguments; id semantics belong to the shared logic
        // so both surfaces answer identically
        let args: FetchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let payload = self.services.assistant.fetch(&args.student_id).await;

        // Same payload the REST surface returns, JSON inside the envelope
        Ok(text_content(serde_json::to_string(&payload)?))
    }
}
