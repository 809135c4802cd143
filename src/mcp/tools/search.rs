//! Search tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchToolHandler {
    services: Arc<Services>,
}

impl SearchToolHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchToolHandler {
    fn name(&self) -> &str {
        "search"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search".to_string(),
            description: "Search for struggling students with a free-text query. \
                         The query is matched against a class pattern ('class 7', '3rd grade'), \
                         a fixed subject vocabulary (math, english, science, history, geography, \
                         physics, chemistry, biology), and a period phrase ('this month', \
                         'last month', 'this year', 'last year'). \
                         Returns a JSON object with `results`, `query_params`, and \
                         `total_students`; queries missing a class or subject return an \
                         `error` and a usage `hint` instead."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query. Example: 'find struggling students of class 7 in math this month'",
                        "minLength": 1
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            query: String,
        }

        // Parse arguments; query semantics (including empty or
        // unmatchable queries) belong to the shared logic so both
        // surfaces answer identically
        let args: SearchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let payload = self.services.assistant.search(&args.query).await;

        // Same payload the REST surface returns, JSON inside the envelope
        Ok(text_content(serde_json::to_string(&payload)?))
    }
}
