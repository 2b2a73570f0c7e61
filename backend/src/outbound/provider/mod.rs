//! Text-generation provider adapters.
//!
//! Each adapter implements the `TextGenerationProvider` port and owns its
//! wire format. [`build_provider`] turns resolved [`ProviderSettings`] into
//! the adapter the server shares across workers.

mod config;
mod dto;
mod gemini;
mod http;
mod openai;

use std::sync::Arc;

pub use config::{
    BuildMode, DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL, HostedProviderSettings,
    ProviderConfigError, ProviderKind, ProviderSettings, UnknownProvider,
    provider_settings_from_env,
};
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use crate::domain::ports::{FixtureTextGenerationProvider, TextGenerationProvider};

/// Errors raised while constructing a provider adapter.
#[derive(Debug, thiserror::Error)]
pub enum ProviderBuildError {
    /// The HTTP client could not be initialised (TLS backend, proxy config).
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The request URL could not be derived from the configured base URL.
    #[error("invalid provider endpoint: {message}")]
    Endpoint {
        /// Why the URL could not be built.
        message: String,
    },
}

/// Build the adapter described by `settings`.
///
/// # Errors
///
/// Returns [`ProviderBuildError`] when a hosted adapter cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use nameforge::domain::ports::TextGenerationProvider as _;
/// use nameforge::outbound::provider::{ProviderSettings, build_provider};
///
/// let provider = build_provider(&ProviderSettings::Fixture { completion: None })
///     .expect("fixture always builds");
/// assert_eq!(provider.name(), "fixture");
/// ```
pub fn build_provider(
    settings: &ProviderSettings,
) -> Result<Arc<dyn TextGenerationProvider>, ProviderBuildError> {
    Ok(match settings {
        ProviderSettings::Gemini(hosted) => Arc::new(GeminiProvider::new(hosted)?),
        ProviderSettings::OpenAi(hosted) => Arc::new(OpenAiProvider::new(hosted)?),
        ProviderSettings::Fixture { completion } => match completion {
            Some(text) => Arc::new(FixtureTextGenerationProvider::new(text.clone())),
            None => Arc::new(FixtureTextGenerationProvider::default()),
        },
    })
}
