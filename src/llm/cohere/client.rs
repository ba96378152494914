//! Cohere client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;

use crate::llm::error::UpstreamError;
use crate::llm::provider::{ChatProvider, EventStream};
use crate::llm::types::CompletionRequest;

use super::mapper::{from_cohere_event, to_cohere_request};
use super::stream::parse_event_stream;

/// Default Cohere API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.cohere.com";

/// Cohere model identifiers
#[derive(Debug, Clone)]
pub enum CohereModel {
    /// Command R+
    CommandRPlus,
    /// Command R
    CommandR,
}

impl CohereModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            CohereModel::CommandRPlus => "command-r-plus",
            CohereModel::CommandR => "command-r",
        }
    }
}

/// Client for the Cohere streaming chat API
///
/// Holds the long-lived HTTP client and credentials; constructed once at
/// startup and shared by reference with every request's completion logic.
pub struct CohereClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer API key
    api_key: String,
    /// API base URL (overridable for tests)
    base_url: String,
    /// Model to use
    model: CohereModel,
}

impl CohereClient {
    /// Create a new Cohere client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, model: CohereModel) -> Result<Self, UpstreamError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| UpstreamError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the endpoint URL for streaming chat
    fn build_endpoint_url(&self) -> String {
        format!("{}/v1/chat", self.base_url)
    }

    /// Make a streaming chat request
    async fn make_streaming_request(
        &self,
        request: CompletionRequest,
    ) -> Result<EventStream, UpstreamError> {
        let cohere_request = to_cohere_request(&request, &self.model);

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&cohere_request)
            .send()
            .await?;

        // Check status before consuming the body as a stream
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(UpstreamError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let byte_stream = response.bytes_stream();
        let wire_stream = parse_event_stream(Box::pin(byte_stream));

        let event_stream = wire_stream.map(|result| result.map(from_cohere_event));

        Ok(Box::pin(event_stream))
    }
}

#[async_trait]
impl ChatProvider for CohereClient {
    async fn stream_chat(&self, request: CompletionRequest) -> Result<EventStream, UpstreamError> {
        self.make_streaming_request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohere_model_as_str() {
        assert_eq!(CohereModel::CommandRPlus.as_str(), "command-r-plus");
        assert_eq!(CohereModel::CommandR.as_str(), "command-r");
    }

    #[test]
    fn test_default_endpoint_url() {
        let client =
            CohereClient::new("test-key".to_string(), CohereModel::CommandRPlus).unwrap();
        assert_eq!(client.build_endpoint_url(), "https://api.cohere.com/v1/chat");
    }

    #[test]
    fn test_base_url_override() {
        let client = CohereClient::new("test-key".to_string(), CohereModel::CommandR)
            .unwrap()
            .with_base_url("http://127.0.0.1:9999");
        assert_eq!(client.build_endpoint_url(), "http://127.0.0.1:9999/v1/chat");
    }
}
