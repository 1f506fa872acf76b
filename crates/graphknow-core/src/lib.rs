//! Graphknow Core - Configuration and shared error handling

pub mod config;
pub mod error;

pub use config::{OpenAiConfig, StoreConfig};
pub use error::{Error, Result};
