//! Driven port for hosted text-generation providers.
//!
//! Adapters own transport details (endpoints, credentials, wire formats) and
//! hand back the provider's free-text completion. Which provider backs the
//! port is a deployment choice.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while obtaining a completion from a provider.
    pub enum TextGenerationError {
        /// The request never reached the provider or the connection failed.
        Transport => "provider transport failed: {message}",
        /// The provider did not answer within the configured timeout.
        Timeout => "provider timed out: {message}",
        /// The provider refused the request (authentication, quota, bad input).
        Rejected => "provider rejected request: {message}",
        /// The provider answered with a body the adapter could not decode.
        Decode => "provider response could not be decoded: {message}",
        /// The provider answered without any completion text.
        EmptyCompletion => "provider returned no completion: {message}",
    }
}

/// Port for turning a prompt into free-text completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Submit `prompt` and return the completion text.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use nameforge::domain::ports::{FixtureTextGenerationProvider, TextGenerationProvider};
    ///
    /// let provider = FixtureTextGenerationProvider::new("{\"names\":[]}");
    /// let text = provider.generate_text("Name my bakery").await?;
    /// assert_eq!(text, "{\"names\":[]}");
    /// # Ok::<(), nameforge::domain::ports::TextGenerationError>(())
    /// ```
    async fn generate_text(&self, prompt: &str) -> Result<String, TextGenerationError>;
}

/// Fixture provider that ignores the prompt and returns a canned completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureTextGenerationProvider {
    completion: String,
}

impl FixtureTextGenerationProvider {
    /// Build a fixture returning `completion` for every prompt.
    pub fn new(completion: impl Into<String>) -> Self {
        Self {
            completion: completion.into(),
        }
    }
}

impl Default for FixtureTextGenerationProvider {
    fn default() -> Self {
        Self::new(r#"{"names": []}"#)
    }
}

#[async_trait]
impl TextGenerationProvider for FixtureTextGenerationProvider {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn generate_text(&self, _prompt: &str) -> Result<String, TextGenerationError> {
        Ok(self.completion.clone())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_returns_configured_completion() {
        let provider = FixtureTextGenerationProvider::new("Here you go: {}");
        let text = provider
            .generate_text("anything")
            .await
            .expect("fixture never fails");
        assert_eq!(text, "Here you go: {}");
    }

    #[tokio::test]
    async fn default_fixture_returns_empty_name_list() {
        let text = FixtureTextGenerationProvider::default()
            .generate_text("anything")
            .await
            .expect("fixture never fails");
        assert_eq!(text, r#"{"names": []}"#);
    }

    #[test]
    fn errors_render_their_category() {
        let err = TextGenerationError::rejected("status 401: bad key");
        assert_eq!(err.to_string(), "provider rejected request: status 401: bad key");
        assert_eq!(err.kind(), "rejected");
    }
}
