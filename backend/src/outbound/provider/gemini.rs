//! Reqwest-backed Gemini adapter.
//!
//! Calls `POST {base}/v1beta/models/{model}:generateContent` with the prompt
//! as a single user turn and returns the first candidate's text.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::config::HostedProviderSettings;
use super::dto::{GeminiRequestDto, GeminiResponseDto};
use super::http::{build_client, endpoint, send_for_json};
use super::ProviderBuildError;
use crate::domain::ports::{TextGenerationError, TextGenerationProvider};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` adapter.
pub struct GeminiProvider {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiProvider {
    /// Build the adapter for one model.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// endpoint URL cannot be derived from the base URL.
    pub fn new(settings: &HostedProviderSettings) -> Result<Self, ProviderBuildError> {
        let path = format!("v1beta/models/{}:generateContent", settings.model);
        Ok(Self {
            client: build_client(settings.timeout)?,
            endpoint: endpoint(&settings.base_url, &path)?,
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl TextGenerationProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, TextGenerationError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&GeminiRequestDto::user_prompt(prompt));
        if !self.api_key.is_empty() {
            request = request.header(API_KEY_HEADER, self.api_key.as_str());
        }

        debug!(endpoint = %self.endpoint, "sending Gemini request");
        let response: GeminiResponseDto = send_for_json(request).await?;
        response
            .into_completion()
            .map_err(TextGenerationError::empty_completion)
    }
}
