use podsum_core::{PodsumError, PodsumResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://api.openai.com/v1";
const MODEL: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, API_BASE)
    }

    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint_chat_completions(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// One chat-completions call, system + user message, no streaming. The
    /// first choice's content is returned verbatim. Every failure on this
    /// path collapses into `Generation` carrying the underlying text.
    pub async fn chat(&self, system: &str, user: &str) -> PodsumResult<String> {
        let request = ChatCompletionsRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint_chat_completions())
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| PodsumError::Generation(format!("completion request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PodsumError::Generation(format!(
                "completion error: status={status} body={body}"
            )));
        }

        let payload = response
            .json::<ChatCompletionsResponse>()
            .await
            .map_err(|err| {
                PodsumError::Generation(format!("completion response parse failed: {err}"))
            })?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                PodsumError::Generation("completion response contained no choices".to_string())
            })
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
