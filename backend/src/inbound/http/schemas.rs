//! HTTP payloads and OpenAPI schema definitions.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts for documentation only;
//! [`ErrorBody`] and [`GenerateRequest`] are real wire types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;

/// Error response body: `{ "error": "<user-facing message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Short, non-technical message.
    #[schema(example = "Invalid description")]
    pub error: String,
}

impl From<&Error> for ErrorBody {
    fn from(value: &Error) -> Self {
        Self {
            error: value.message().to_owned(),
        }
    }
}

/// Request body for `POST /api/generate`.
///
/// Documentation only: the handler reads the raw body so that malformed JSON
/// and schema mismatches map to different responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Business description, 1 to 300 characters.
    #[schema(max_length = 300, example = "A mobile app that pairs dog owners with nearby walkers")]
    pub description: String,
}

/// OpenAPI schema for [`crate::domain::DomainAvailability`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DomainAvailability)]
pub enum DomainAvailabilitySchema {
    #[schema(rename = "Likely Available")]
    LikelyAvailable,
    #[schema(rename = "Likely Taken")]
    LikelyTaken,
    #[schema(rename = "Check Required")]
    CheckRequired,
}

/// OpenAPI schema for [`crate::domain::NameSuggestion`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NameSuggestion, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NameSuggestionSchema {
    #[schema(example = "Pawtrol")]
    name: String,
    #[schema(example = "pawtrol.io")]
    domain: String,
    domain_available: DomainAvailabilitySchema,
    #[schema(example = "Playful blend of paw and patrol.")]
    rationale: String,
    /// Catchiness rating from 1 to 10.
    #[schema(minimum = 1, maximum = 10, example = 8)]
    vibe_score: i32,
}

/// OpenAPI schema for [`crate::domain::SuggestionList`].
///
/// The endpoint forwards the provider's object verbatim; this describes the
/// shape the prompt asks for.
#[derive(ToSchema)]
#[schema(as = crate::domain::SuggestionList)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SuggestionListSchema {
    names: Vec<NameSuggestionSchema>,
}
