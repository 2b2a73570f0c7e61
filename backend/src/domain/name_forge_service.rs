//! Name generation use-case.
//!
//! One request maps to exactly one provider call: render the fixed prompt,
//! await the completion, extract the embedded JSON object, and return it
//! untouched. There is no retry and no caching; identical descriptions produce
//! fresh suggestions.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::ports::{NameSuggestionCommand, TextGenerationProvider};
use super::{
    BusinessDescription, CompletionError, Error, TraceId, parse_completion, render_naming_prompt,
};

/// [`NameSuggestionCommand`] backed by a [`TextGenerationProvider`].
#[derive(Clone)]
pub struct NameForgeService {
    provider: Arc<dyn TextGenerationProvider>,
}

impl NameForgeService {
    /// Build the service around a provider adapter.
    pub fn new(provider: Arc<dyn TextGenerationProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl NameSuggestionCommand for NameForgeService {
    async fn suggest_names(&self, description: &BusinessDescription) -> Result<Value, Error> {
        let prompt = render_naming_prompt(description);
        let provider = self.provider.name();
        let trace_id = TraceId::current().map(|id| id.to_string());

        let completion = self.provider.generate_text(&prompt).await.map_err(|err| {
            error!(trace_id = ?trace_id, provider, kind = err.kind(), error = %err, "generate error");
            Error::generation_failed()
        })?;
        debug!(provider, completion_len = completion.len(), "provider completion received");

        parse_completion(&completion).map_err(|err| match err {
            CompletionError::NoJsonObject => {
                warn!(trace_id = ?trace_id, provider, "completion contains no JSON object");
                Error::unparseable_completion()
            }
            CompletionError::MalformedJson { .. } => {
                error!(trace_id = ?trace_id, provider, error = %err, "generate error");
                Error::generation_failed()
            }
        })
    }
}

#[cfg(test)]
#[path = "name_forge_service_tests.rs"]
mod tests;
