//! Graph search tool — run a model-produced Cypher query against the store

use crate::registry::{Tool, ToolResult};
use graphknow_store::GraphStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub struct GraphSearchTool {
    store: Arc<dyn GraphStore>,
}

impl GraphSearchTool {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Tool for GraphSearchTool {
    fn name(&self) -> &str {
        "graph_search"
    }

    fn description(&self) -> &str {
        "Perform a graph-based search to retrieve contextually relevant information \
         from a Neo4j database based on a user's query."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "A Cypher query string based on a user query."
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> ToolResult {
        let query = match args.get("query").and_then(|v| v.as_str()) {
            Some(q) => q,
            None => return ToolResult::error("Missing required parameter: query"),
        };

        debug!("graph_search: {}", query);

        // The query text is the model's output, executed verbatim. Validation
        // is an explicit non-goal for this sketch.
        match self.store.search(query).await {
            Ok(rows) => ToolResult::Json(json!(rows)),
            Err(e) => ToolResult::error(format!("Query failed: {}", e)),
        }
    }
}
