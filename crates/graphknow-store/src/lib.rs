//! Graphknow Store — Cypher execution against a Neo4j graph
//!
//! The store is deliberately thin: one pooled connection, one-time seeding
//! from a script file, and verbatim execution of caller-supplied query
//! strings. The query text comes from the remote model and is not validated
//! here; callers interpret the returned rows.

pub mod neo4j;

pub use neo4j::Neo4jStore;

use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store initialization failed: {0}")]
    Init(String),

    #[error("query execution failed: {0}")]
    Query(String),
}

impl StoreError {
    pub fn init(message: impl Into<String>) -> Self {
        Self::Init(message.into())
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }
}

/// Graph store trait
///
/// The connection is owned by the implementation and released when the store
/// is dropped, on every exit path. There is no explicit close call.
#[async_trait::async_trait]
pub trait GraphStore: Send + Sync {
    /// Execute a seed script once against the store. Fatal to startup on
    /// failure; errors wrap the underlying cause as `StoreError::Init`.
    async fn seed(&self, script: &str) -> StoreResult<()>;

    /// Execute a query string and return the raw result rows.
    /// No retry, no partial results: any execution failure propagates.
    async fn search(&self, query: &str) -> StoreResult<Vec<Value>>;

    /// Read a seed script from disk and execute it.
    async fn seed_from_file(&self, path: &Path) -> StoreResult<()> {
        let script = tokio::fs::read_to_string(path).await.map_err(|e| {
            StoreError::init(format!("failed to read {}: {}", path.display(), e))
        })?;
        self.seed(&script).await
    }
}
