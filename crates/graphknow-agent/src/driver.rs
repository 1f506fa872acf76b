//! Run driver — the poll/act/resume state machine

use graphknow_llm::{AssistantService, RunStatus, ThreadMessage, ToolCall, ToolOutput};
use graphknow_tools::{ToolRegistry, ToolResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Clone, Debug)]
pub struct DriverConfig {
    /// Fixed wait between run polls.
    pub poll_interval: Duration,
    /// Total wait budget for one question. Exceeding it is a distinct
    /// timeout error, not an endless loop.
    pub max_wait: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1000),
            max_wait: Duration::from_secs(120),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("assistant api error: {0}")]
    Api(#[from] graphknow_llm::ApiError),

    #[error("run timed out after {waited_ms}ms while {status}")]
    TimedOut { status: RunStatus, waited_ms: u64 },

    #[error("run cancelled")]
    Cancelled,

    #[error("run ended with status {status}: {message}")]
    RunFailed { status: RunStatus, message: String },
}

pub struct RunDriver {
    service: Arc<dyn AssistantService>,
    tools: Arc<ToolRegistry>,
    config: DriverConfig,
}

impl RunDriver {
    pub fn new(
        service: Arc<dyn AssistantService>,
        tools: Arc<ToolRegistry>,
        config: DriverConfig,
    ) -> Self {
        Self {
            service,
            tools,
            config,
        }
    }

    /// Ask one question: create a thread, run the assistant on it, service
    /// any tool calls, and return the thread's messages once the run
    /// completes.
    ///
    /// Pending statuses poll on a fixed interval. Each wait races the
    /// cancellation token and the overall wait budget; a failed, cancelled,
    /// or expired terminal status is an error, not a silent fall-through.
    pub async fn ask(
        &self,
        assistant_id: &str,
        question: &str,
        cancel: CancellationToken,
    ) -> Result<Vec<ThreadMessage>, DriverError> {
        let thread = self.service.create_thread().await?;
        self.service.add_user_message(&thread.id, question).await?;
        let mut run = self.service.create_run(&thread.id, assistant_id).await?;
        info!("run {} started on thread {}", run.id, thread.id);

        let started = Instant::now();
        loop {
            match run.status {
                status if status.is_pending() => {
                    if started.elapsed() >= self.config.max_wait {
                        return Err(DriverError::TimedOut {
                            status,
                            waited_ms: started.elapsed().as_millis() as u64,
                        });
                    }
                    tokio::select! {
                        _ = cancel.cancelled() => return Err(DriverError::Cancelled),
                        _ = tokio::time::sleep(self.config.poll_interval) => {}
                    }
                    run = self.service.retrieve_run(&thread.id, &run.id).await?;
                    debug!("run {} status: {}", run.id, run.status);
                }
                RunStatus::RequiresAction => {
                    let outputs = self.dispatch_tool_calls(run.pending_tool_calls()).await;
                    run = self
                        .service
                        .submit_tool_outputs(&thread.id, &run.id, outputs)
                        .await?;
                }
                RunStatus::Completed => {
                    info!("run {} completed", run.id);
                    break;
                }
                status => {
                    let message = run
                        .last_error
                        .map(|e| format!("{}: {}", e.code, e.message))
                        .unwrap_or_else(|| "no error detail".to_string());
                    return Err(DriverError::RunFailed { status, message });
                }
            }
        }

        Ok(self.service.list_messages(&thread.id).await?)
    }

    /// Dispatch every requested call in order and pair each tool call id
    /// with exactly one output. Dispatch failures (unknown name, malformed
    /// arguments, tool errors) become error text the model can react to.
    async fn dispatch_tool_calls(&self, calls: &[ToolCall]) -> Vec<ToolOutput> {
        let mut outputs = Vec::with_capacity(calls.len());
        for call in calls {
            info!("tool call {}: {}", call.id, call.function.name);
            let result = match serde_json::from_str(&call.function.arguments) {
                Ok(args) => self.tools.execute(&call.function.name, args).await,
                Err(e) => ToolResult::error(format!("Invalid tool arguments: {}", e)),
            };
            if result.is_error() {
                warn!("tool call {} failed: {}", call.id, result.to_output_string());
            }
            outputs.push(ToolOutput {
                tool_call_id: call.id.clone(),
                output: result.to_output_string(),
            });
        }
        outputs
    }
}
