//! Transport from the Client View to the generation endpoint.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::domain::SuggestionList;

/// Message shown when the server gives no usable error text.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

const GENERATE_PATH: &str = "api/generate";

/// Failure of one generation request, as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },
    /// The request could not be completed.
    #[error("request failed: {0}")]
    Transport(String),
    /// A success response did not hold a suggestion list.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Text to show the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}

/// Port the Client View uses to request suggestions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionGateway: Send + Sync {
    /// Request suggestions for `description`.
    async fn request_suggestions(&self, description: &str)
    -> Result<SuggestionList, GatewayError>;
}

#[derive(Deserialize)]
struct ErrorBodyDto {
    error: Option<String>,
}

/// [`SuggestionGateway`] posting to `POST /api/generate` over HTTP.
pub struct HttpSuggestionGateway {
    client: Client,
    endpoint: Url,
}

impl HttpSuggestionGateway {
    /// Target the generation endpoint under `base_url`.
    ///
    /// A path on `base_url` is kept as a prefix, so a server mounted at
    /// `https://host/nameforge` is reached at `/nameforge/api/generate`.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` cannot be extended with the endpoint
    /// path or the HTTP client cannot be built.
    pub fn new(base_url: &Url) -> Result<Self, GatewayError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        let endpoint = base
            .join(GENERATE_PATH)
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        let client = Client::builder()
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Resolved URL of the generation endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionGateway for HttpSuggestionGateway {
    async fn request_suggestions(
        &self,
        description: &str,
    ) -> Result<SuggestionList, GatewayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "description": description }))
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "generation response received");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBodyDto>(body.as_ref())
                .ok()
                .and_then(|dto| dto.error);
            return Err(GatewayError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(body.as_ref()).map_err(|err| GatewayError::Decode(err.to_string()))
    }
}
