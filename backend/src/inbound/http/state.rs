//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureNameSuggestionCommand, NameSuggestionCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case behind `POST /api/generate`.
    pub name_suggestions: Arc<dyn NameSuggestionCommand>,
}

impl HttpState {
    /// Construct state from the name suggestion port.
    pub fn new(name_suggestions: Arc<dyn NameSuggestionCommand>) -> Self {
        Self { name_suggestions }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureNameSuggestionCommand))
    }
}
