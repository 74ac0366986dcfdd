use podsum_core::{PodsumResult, VideoMetadata};
use reqwest::Client;

use crate::api::noembed::{NoembedClient, NoembedResponse};

#[derive(Debug, Clone)]
pub struct MetadataFetcher {
    client: NoembedClient,
}

impl MetadataFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("podsum/0.1")
            .build()
            .expect("failed to build http client");
        Self {
            client: NoembedClient::new(client),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("podsum/0.1")
            .build()
            .expect("failed to build http client");
        Self {
            client: NoembedClient::with_base_url(client, base_url),
        }
    }

    pub async fn fetch(&self, video_id: &str) -> PodsumResult<VideoMetadata> {
        let response = self.client.fetch(video_id).await?;
        Ok(metadata_from_response(response))
    }
}

impl Default for MetadataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn metadata_from_response(response: NoembedResponse) -> VideoMetadata {
    VideoMetadata {
        title: response
            .title
            .unwrap_or_else(|| "Unknown Title".to_string()),
        author: response
            .author_name
            .unwrap_or_else(|| "Unknown Author".to_string()),
        thumbnail_url: response.thumbnail_url,
    }
}

#[cfg(test)]
mod tests {
    use super::metadata_from_response;
    use crate::api::noembed::NoembedResponse;

    #[test]
    fn maps_all_fields() {
        let metadata = metadata_from_response(NoembedResponse {
            title: Some("T".to_string()),
            author_name: Some("A".to_string()),
            thumbnail_url: Some("http://x/thumb.jpg".to_string()),
        });
        assert_eq!(metadata.title, "T");
        assert_eq!(metadata.author, "A");
        assert_eq!(metadata.thumbnail_url.as_deref(), Some("http://x/thumb.jpg"));
    }

    #[test]
    fn substitutes_defaults_for_missing_fields() {
        let metadata = metadata_from_response(NoembedResponse {
            title: None,
            author_name: None,
            thumbnail_url: None,
        });
        assert_eq!(metadata.title, "Unknown Title");
        assert_eq!(metadata.author, "Unknown Author");
        assert!(metadata.thumbnail_url.is_none());
    }
}
