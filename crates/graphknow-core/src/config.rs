//! Environment-derived configuration
//!
//! The process takes no credentials on the command line. Database and API
//! settings come from the environment, matching the deployment convention:
//! DB_URL / DB_USERNAME / DB_PASSWORD for Neo4j, OPENAI_API_KEY (and an
//! optional OPENAI_BASE_URL override) for the assistant service.

use crate::error::{Error, Result};

/// Neo4j connection settings.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            url: require_env("DB_URL")?,
            username: require_env("DB_USERNAME")?,
            password: require_env("DB_PASSWORD")?,
        })
    }
}

/// Assistant service settings.
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Override for the API root, mainly for tests and proxies.
    pub base_url: Option<String>,
}

impl OpenAiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require_env("OPENAI_API_KEY")?,
            base_url: std::env::var("OPENAI_BASE_URL").ok(),
        })
    }
}

fn require_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingEnv(name)),
    }
}
