//! Reqwest-backed adapter for OpenAI-compatible chat completion APIs.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::config::HostedProviderSettings;
use super::dto::{ChatCompletionRequestDto, ChatCompletionResponseDto};
use super::http::{build_client, endpoint, send_for_json};
use super::ProviderBuildError;
use crate::domain::ports::{TextGenerationError, TextGenerationProvider};

/// `POST {base}/v1/chat/completions` adapter with bearer authentication.
pub struct OpenAiProvider {
    client: Client,
    endpoint: Url,
    model: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Build the adapter for one model.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// endpoint URL cannot be derived from the base URL.
    pub fn new(settings: &HostedProviderSettings) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            client: build_client(settings.timeout)?,
            endpoint: endpoint(&settings.base_url, "v1/chat/completions")?,
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl TextGenerationProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, TextGenerationError> {
        let request = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&ChatCompletionRequestDto::user_prompt(&self.model, prompt));

        debug!(endpoint = %self.endpoint, model = %self.model, "sending chat completion request");
        let response: ChatCompletionResponseDto = send_for_json(request).await?;
        response
            .into_completion()
            .map_err(TextGenerationError::empty_completion)
    }
}
