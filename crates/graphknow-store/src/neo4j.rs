//! Neo4j-backed graph store

use crate::{GraphStore, StoreError, StoreResult};
use graphknow_core::StoreConfig;
use neo4rs::{query, Graph};
use serde_json::Value;
use tracing::{debug, info};

/// Graph store backed by a neo4rs connection pool.
///
/// Dropping the store releases the pool, so cleanup happens on error paths
/// as well as the happy path.
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    /// Connect to Neo4j using the environment-derived config.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let graph = Graph::new(config.url.as_str(), config.username.as_str(), config.password.as_str())
            .await
            .map_err(|e| StoreError::init(format!("failed to connect to {}: {}", config.url, e)))?;
        debug!("connected to neo4j at {}", config.url);
        Ok(Self { graph })
    }
}

#[async_trait::async_trait]
impl GraphStore for Neo4jStore {
    async fn seed(&self, script: &str) -> StoreResult<()> {
        self.graph
            .run(query(script))
            .await
            .map_err(|e| StoreError::init(format!("seed script failed: {}", e)))?;
        info!("database has been seeded");
        Ok(())
    }

    async fn search(&self, cypher: &str) -> StoreResult<Vec<Value>> {
        let mut stream = self
            .graph
            .execute(query(cypher))
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(row) = stream
            .next()
            .await
            .map_err(|e| StoreError::query(e.to_string()))?
        {
            let value: Value = row
                .to()
                .map_err(|e| StoreError::query(format!("row decode: {}", e)))?;
            rows.push(value);
        }

        debug!("search returned {} rows", rows.len());
        Ok(rows)
    }
}
