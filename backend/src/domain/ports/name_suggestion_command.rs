//! Driving port for the name generation use-case.
//!
//! Inbound adapters call this port with an already validated description and
//! receive the provider's JSON object, or a domain [`Error`] carrying the
//! user-facing message.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::{BusinessDescription, Error};

/// Domain use-case port for generating name suggestions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NameSuggestionCommand: Send + Sync {
    /// Generate suggestions for `description`.
    ///
    /// The returned value is the JSON object extracted from the provider's
    /// reply, unmodified.
    async fn suggest_names(&self, description: &BusinessDescription) -> Result<Value, Error>;
}

/// Fixture command returning an empty suggestion list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNameSuggestionCommand;

#[async_trait]
impl NameSuggestionCommand for FixtureNameSuggestionCommand {
    async fn suggest_names(&self, _description: &BusinessDescription) -> Result<Value, Error> {
        Ok(json!({ "names": [] }))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_returns_empty_names() {
        let description = BusinessDescription::new("A bakery for dogs").expect("valid");
        let value = FixtureNameSuggestionCommand
            .suggest_names(&description)
            .await
            .expect("fixture never fails");
        assert_eq!(value, json!({ "names": [] }));
    }
}
