//! Tool registry and trait definitions

use graphknow_llm::ToolDefinition;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone, Debug)]
pub enum ToolResult {
    Text(String),
    Json(Value),
    Error(String),
}

impl ToolResult {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    /// Serialize for submission back to the assistant service.
    pub fn to_output_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Json(v) => serde_json::to_string(v).unwrap_or_default(),
            Self::Error(e) => format!("Error: {}", e),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// The Tool trait — implement this to add a new capability.
///
/// Exposes a name, a JSON-schema parameter description sent to the service
/// at assistant creation, and an invoke operation.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name (e.g. "graph_search").
    fn name(&self) -> &str;

    /// Human-readable description sent to the assistant service.
    fn description(&self) -> &str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value) -> ToolResult;

    /// Convert to the service-side function declaration.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name(), self.description(), self.input_schema())
    }
}

pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Dispatch by name. An unknown name yields an error result rather
    /// than a panic; the caller submits it back to the service.
    pub async fn execute(&self, name: &str, args: Value) -> ToolResult {
        match self.tools.get(name) {
            Some(tool) => tool.execute(args).await,
            None => {
                warn!("tool not found: {}", name);
                ToolResult::Error(format!("Tool not found: {}", name))
            }
        }
    }

    /// Function declarations for all registered tools.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.to_definition()).collect()
    }

    pub fn list(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}
