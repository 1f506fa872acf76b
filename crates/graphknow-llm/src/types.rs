//! Assistant API wire types

use serde::{Deserialize, Serialize};

/// Remote run status. The service owns the state; we only observe it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Incomplete,
    Expired,
    /// Statuses this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Still waiting on the service; keep polling.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Queued | Self::InProgress | Self::Cancelling)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::RequiresAction => "requires_action",
            Self::Cancelling => "cancelling",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
            Self::Expired => "expired",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// A run of the assistant against a thread.
#[derive(Clone, Debug, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub required_action: Option<RequiredAction>,
    #[serde(default)]
    pub last_error: Option<LastError>,
}

impl Run {
    /// Tool calls the service is waiting on, empty unless requires_action.
    pub fn pending_tool_calls(&self) -> &[ToolCall] {
        self.required_action
            .as_ref()
            .map(|a| a.submit_tool_outputs.tool_calls.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RequiredAction {
    pub submit_tool_outputs: SubmitToolOutputs,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubmitToolOutputs {
    pub tool_calls: Vec<ToolCall>,
}

/// A model-requested tool invocation, consumed exactly once per action cycle.
#[derive(Clone, Debug, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub function: FunctionCall,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Serialized JSON arguments, as emitted by the model.
    pub arguments: String,
}

/// A tool result submitted back to the service, tied to a ToolCall id.
#[derive(Clone, Debug, Serialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LastError {
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Assistant {
    pub id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Thread {
    pub id: String,
}

/// A message in a thread. The list is append-only on the service side.
#[derive(Clone, Debug, Deserialize)]
pub struct ThreadMessage {
    pub id: String,
    pub role: String,
    pub created_at: i64,
    #[serde(default)]
    pub assistant_id: Option<String>,
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

impl ThreadMessage {
    /// First text content block, if any.
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(|c| match c {
            MessageContent::Text { text } => Some(text.value.as_str()),
            MessageContent::Unsupported => None,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum MessageContent {
    #[serde(rename = "text")]
    Text { text: TextContent },

    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TextContent {
    pub value: String,
}

/// Declaration of an assistant to create.
#[derive(Clone, Debug, Serialize)]
pub struct AssistantSpec {
    pub model: String,
    pub name: String,
    pub instructions: String,
    pub tools: Vec<ToolDefinition>,
}

/// A function tool declaration (JSON-schema parameters).
#[derive(Clone, Debug, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionSpec,
}

#[derive(Clone, Debug, Serialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            kind: "function".to_string(),
            function: FunctionSpec {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}
