//! Client View: the interactive side of name generation.
//!
//! [`ClientView`] holds the description being edited and the outcome of the
//! last submission. It moves through four states:
//!
//! ```text
//! Idle --submit--> Loading --ok--> Success
//!                     \----err---> Error
//! ```
//!
//! Success and Error accept a new submission, which clears the previous
//! outcome. Blank descriptions never leave the current state and no request
//! is issued. A submission while Loading is rejected; requests are never
//! cancelled.

mod gateway;
pub mod render;

pub use gateway::{FALLBACK_ERROR_MESSAGE, GatewayError, HttpSuggestionGateway, SuggestionGateway};
#[cfg(test)]
pub use gateway::MockSuggestionGateway;

use crate::domain::{NameSuggestion, SuggestionList};

/// Observable state of a [`ClientView`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClientState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request produced suggestions.
    Success(SuggestionList),
    /// The last request failed with this user-facing message.
    Error(String),
}

/// Why a submission was refused before any request was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// The description is empty or whitespace only.
    #[error("description is blank")]
    Blank,
    /// A request is already in flight.
    #[error("a request is already in flight")]
    Busy,
}

/// Description input plus the outcome of the last submission.
#[derive(Debug, Clone, Default)]
pub struct ClientView {
    description: String,
    state: ClientState,
}

impl ClientView {
    /// Idle view with an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the description text.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Current description text, as typed.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current state of the request cycle.
    #[must_use]
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ClientState::Loading)
    }

    /// Suggestions from the last successful request, empty otherwise.
    pub fn results(&self) -> &[NameSuggestion] {
        match &self.state {
            ClientState::Success(list) => &list.names,
            _ => &[],
        }
    }

    /// Message from the last failed request.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ClientState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Start a submission: clear the previous outcome and enter Loading.
    ///
    /// Returns the description to send.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::Blank`] for whitespace-only input and
    /// [`SubmitRejected::Busy`] while a request is in flight. The state is
    /// left untouched in both cases.
    pub fn begin_submit(&mut self) -> Result<String, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::Busy);
        }
        if self.description.trim().is_empty() {
            return Err(SubmitRejected::Blank);
        }
        self.state = ClientState::Loading;
        Ok(self.description.clone())
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Ignored unless the view is Loading.
    pub fn complete(&mut self, outcome: Result<SuggestionList, GatewayError>) {
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(list) => ClientState::Success(list),
            Err(err) => ClientState::Error(err.user_message().to_owned()),
        };
    }

    /// Submit the current description through `gateway` and await the result.
    ///
    /// # Errors
    ///
    /// Propagates [`SubmitRejected`] from [`Self::begin_submit`]; request
    /// failures are recorded in the state instead.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<(), SubmitRejected>
    where
        G: SuggestionGateway + ?Sized,
    {
        let description = self.begin_submit()?;
        let outcome = gateway.request_suggestions(&description).await;
        self.complete(outcome);
        Ok(())
    }
}
