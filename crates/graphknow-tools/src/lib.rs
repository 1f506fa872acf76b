//! Graphknow Tools — capabilities the assistant can invoke
//!
//! Each tool is a self-contained file in src/tools/.
//! To add a tool: create the file, implement the Tool trait, register it in
//! create_default_registry().

pub mod registry;
pub mod tools;

pub use registry::{Tool, ToolRegistry, ToolResult};
pub use tools::graph_search::GraphSearchTool;

use graphknow_store::GraphStore;
use std::sync::Arc;

/// Create the default registry: just graph_search, bound to the store.
///
/// The registry is static for the process lifetime; the set of registered
/// tools must match the declarations sent at assistant creation.
pub fn create_default_registry(store: Arc<dyn GraphStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(GraphSearchTool::new(store));
    registry
}
