//! Name generation HTTP handler.
//!
//! ```text
//! POST /api/generate {"description":"A bakery that only sells sourdough"}
//! ```
//!
//! The body is read as raw bytes. A body that is not JSON at all, or is the
//! JSON literal `null`, is a generic failure. Any other JSON value without a
//! usable `description` string is an invalid request. A typed `web::Json`
//! extractor would blur the two.

use actix_web::{HttpResponse, post, web};
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::{BusinessDescription, Error, TraceId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorBody, GenerateRequest, SuggestionListSchema};
use crate::inbound::http::state::HttpState;

fn parse_body(body: &[u8]) -> Result<Value, Error> {
    let trace_id = TraceId::current().map(|id| id.to_string());
    match serde_json::from_slice(body) {
        Ok(Value::Null) => {
            error!(trace_id = ?trace_id, "request body is JSON null");
            Err(Error::generation_failed())
        }
        Ok(payload) => Ok(payload),
        Err(err) => {
            error!(trace_id = ?trace_id, error = %err, "request body is not valid JSON");
            Err(Error::generation_failed())
        }
    }
}

fn description_from_payload(payload: &Value) -> Result<BusinessDescription, Error> {
    let raw = payload
        .get("description")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            warn!("description missing or not a string");
            Error::invalid_description()
        })?;

    BusinessDescription::new(raw).map_err(|err| {
        warn!(error = %err, "description rejected");
        Error::invalid_description()
    })
}

/// Generate ten name suggestions for a business description.
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    description = "Forward the description to the configured text-generation provider and \
        return the JSON object embedded in its reply.",
    responses(
        (
            status = 200,
            description = "Provider's suggestion object, returned verbatim",
            body = SuggestionListSchema
        ),
        (status = 400, description = "Description missing, not a string, or too long", body = ErrorBody),
        (
            status = 500,
            description = "Body not JSON or null, provider reply unusable, or provider call failed",
            body = ErrorBody
        )
    ),
    tags = ["names"],
    operation_id = "generateNames"
)]
#[post("/generate")]
pub async fn generate(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let payload = parse_body(&body)?;
    let description = description_from_payload(&payload)?;
    let suggestions = state.name_suggestions.suggest_names(&description).await?;
    Ok(HttpResponse::Ok().json(suggestions))
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
