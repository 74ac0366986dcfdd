use podsum_core::{PodsumError, PodsumResult};
use reqwest::Client;
use serde::Deserialize;

const API_BASE: &str = "https://noembed.com/embed";

#[derive(Debug, Clone)]
pub struct NoembedClient {
    client: Client,
    base_url: String,
}

impl NoembedClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, API_BASE)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// One GET against the embed-metadata endpoint for the canonical watch
    /// URL of `video_id`. No retries; every failure site keeps its own kind.
    pub async fn fetch(&self, video_id: &str) -> PodsumResult<NoembedResponse> {
        let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("url", watch_url.as_str())])
            .header("Accept", "application/json")
            .header("User-Agent", "podsum/0.1")
            .send()
            .await
            .map_err(|err| PodsumError::Network(format!("noembed request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PodsumError::Api(format!(
                "noembed error: status={status} body={body}"
            )));
        }

        response
            .json::<NoembedResponse>()
            .await
            .map_err(|err| PodsumError::Parse(format!("noembed response parse failed: {err}")))
    }
}

#[derive(Debug, Deserialize)]
pub struct NoembedResponse {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub thumbnail_url: Option<String>,
}
