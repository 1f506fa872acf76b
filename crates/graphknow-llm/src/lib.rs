//! Graphknow LLM — assistant service client
//!
//! Wire types and a trait for the hosted assistant's thread/run lifecycle,
//! plus the OpenAI Assistants v2 implementation. The run lifecycle is
//! poll-driven: callers create a run, re-fetch it until it needs a tool
//! result or reaches a terminal status, and submit tool outputs to resume.

pub mod openai;
pub mod service;
pub mod types;

pub use openai::OpenAiAssistants;
pub use service::{ApiError, ApiResult, AssistantService};
pub use types::*;
