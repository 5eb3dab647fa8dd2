use crate::ai::openai::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::ai::ChatTransport;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// HTTP transport for OpenAI-compatible chat completion endpoints.
///
/// Holds only a connection-pooling client and the endpoint base URL. The
/// API key is supplied per call, so a single client instance can be shared
/// across concurrent analyses under different credentials.
pub struct OpenAiHttpClient {
    client: Client,
    base_url: String,
}

impl OpenAiHttpClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at an OpenAI-compatible endpoint other than the
    /// default, such as a proxy or a test server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        api_key: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key.trim()))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send analysis request: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Upstream API error (status {}): {}", status, error_text);
            return Err(Error::Upstream(format!(
                "API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to decode upstream response: {}\nBody: {}", e, body);
            Error::Upstream(format!("Failed to decode upstream response: {}", e))
        })
    }
}

#[async_trait]
impl ChatTransport for OpenAiHttpClient {
    async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        tracing::debug!("Sending chat completion request");
        self.post(CHAT_COMPLETIONS_PATH, api_key, request).await
    }
}
