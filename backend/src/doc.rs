//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the generation endpoint, the health checks, and the
//! schema wrappers from `inbound::http::schemas`. Swagger UI serves it in
//! debug builds and `openapi-dump` prints it for external tooling.

use crate::inbound::http::schemas::{
    DomainAvailabilitySchema, ErrorBody, GenerateRequest, NameSuggestionSchema,
    SuggestionListSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NameForge API",
        description = "Generate business name suggestions from a short description."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::generate::generate,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorBody,
        GenerateRequest,
        SuggestionListSchema,
        NameSuggestionSchema,
        DomainAvailabilitySchema
    )),
    tags(
        (name = "names", description = "Name generation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
