//! OpenAI Assistants v2 REST client

use crate::service::{ApiError, ApiResult, AssistantService};
use crate::types::{Assistant, AssistantSpec, Run, Thread, ThreadMessage, ToolOutput};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const ASSISTANTS_BETA: &str = "assistants=v2";

pub struct OpenAiAssistants {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiAssistants {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", ASSISTANTS_BETA)
            .json(body)
            .send()
            .await?;
        Self::decode(path, response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", ASSISTANTS_BETA)
            .send()
            .await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("openai error {} on {}: {}", status, path, error_text);
            if status.as_u16() == 401 {
                return Err(ApiError::AuthFailed(error_text));
            }
            return Err(ApiError::RequestFailed(format!("{}: {}", status, error_text)));
        }
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AssistantService for OpenAiAssistants {
    async fn create_assistant(&self, spec: &AssistantSpec) -> ApiResult<Assistant> {
        debug!("creating assistant: model={}", spec.model);
        self.post("/assistants", spec).await
    }

    async fn create_thread(&self) -> ApiResult<Thread> {
        self.post("/threads", &serde_json::json!({})).await
    }

    async fn add_user_message(&self, thread_id: &str, content: &str) -> ApiResult<()> {
        let _: ThreadMessage = self
            .post(
                &format!("/threads/{}/messages", thread_id),
                &CreateMessage {
                    role: "user",
                    content,
                },
            )
            .await?;
        Ok(())
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> ApiResult<Run> {
        self.post(
            &format!("/threads/{}/runs", thread_id),
            &CreateRun { assistant_id },
        )
        .await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> ApiResult<Run> {
        self.get(&format!("/threads/{}/runs/{}", thread_id, run_id))
            .await
    }

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: Vec<ToolOutput>,
    ) -> ApiResult<Run> {
        self.post(
            &format!("/threads/{}/runs/{}/submit_tool_outputs", thread_id, run_id),
            &SubmitOutputs {
                tool_outputs: outputs,
            },
        )
        .await
    }

    async fn list_messages(&self, thread_id: &str) -> ApiResult<Vec<ThreadMessage>> {
        let list: MessageList = self.get(&format!("/threads/{}/messages", thread_id)).await?;
        Ok(list.data)
    }
}

#[derive(Serialize)]
struct CreateMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CreateRun<'a> {
    assistant_id: &'a str,
}

#[derive(Serialize)]
struct SubmitOutputs {
    tool_outputs: Vec<ToolOutput>,
}

#[derive(serde::Deserialize)]
struct MessageList {
    data: Vec<ThreadMessage>,
}
