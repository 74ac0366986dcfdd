pub mod api;
pub mod prompts;

use podsum_core::{Language, PodsumResult, VideoMetadata};
use reqwest::Client;

use crate::api::openai::ChatClient;

#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    client: ChatClient,
}

impl SummaryGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("podsum/0.1")
            .build()
            .expect("failed to build http client");
        Self {
            client: ChatClient::new(client, api_key),
        }
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("podsum/0.1")
            .build()
            .expect("failed to build http client");
        Self {
            client: ChatClient::with_base_url(client, api_key, base_url),
        }
    }

    pub async fn generate(
        &self,
        metadata: &VideoMetadata,
        language: Language,
    ) -> PodsumResult<String> {
        let prompt = prompts::user_prompt(language, &metadata.title, &metadata.author);
        self.client.chat(prompts::SYSTEM_PROMPT, &prompt).await
    }
}
