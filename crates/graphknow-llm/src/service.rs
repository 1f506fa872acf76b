//! Assistant service trait

use crate::types::{Assistant, AssistantSpec, Run, Thread, ThreadMessage, ToolOutput};

/// Result type for assistant API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Assistant API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

/// Thread/message/run lifecycle of a hosted assistant.
///
/// A run has at most one outstanding action-required state at a time, and a
/// submitted tool output must reference a tool call id from that state.
#[async_trait::async_trait]
pub trait AssistantService: Send + Sync {
    async fn create_assistant(&self, spec: &AssistantSpec) -> ApiResult<Assistant>;

    async fn create_thread(&self) -> ApiResult<Thread>;

    async fn add_user_message(&self, thread_id: &str, content: &str) -> ApiResult<()>;

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> ApiResult<Run>;

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> ApiResult<Run>;

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: Vec<ToolOutput>,
    ) -> ApiResult<Run>;

    async fn list_messages(&self, thread_id: &str) -> ApiResult<Vec<ThreadMessage>>;
}
