//! Transport helpers shared by the reqwest-backed provider adapters.
//!
//! Adapters build their request, hand it to [`send_for_json`], and receive
//! either the decoded response DTO or a [`TextGenerationError`] already
//! classified by failure category.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::ProviderBuildError;
use crate::domain::ports::TextGenerationError;

const USER_AGENT: &str = concat!("nameforge/", env!("CARGO_PKG_VERSION"));
const PREVIEW_CHAR_LIMIT: usize = 160;

/// Build a reqwest client; `None` leaves requests without a deadline.
pub(super) fn build_client(timeout: Option<Duration>) -> Result<Client, ProviderBuildError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Resolve `path` below `base`, keeping any path prefix `base` carries.
pub(super) fn endpoint(base: &Url, path: &str) -> Result<Url, ProviderBuildError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let prefixed = format!("{}/", base.path());
        base.set_path(&prefixed);
    }
    base.join(path)
        .map_err(|err| ProviderBuildError::Endpoint {
            message: format!("cannot join '{path}' onto '{base}': {err}"),
        })
}

/// Send `request` and decode a successful JSON body into `T`.
pub(super) async fn send_for_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, TextGenerationError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }

    serde_json::from_slice(body.as_ref()).map_err(|error| {
        TextGenerationError::decode(format!(
            "invalid provider JSON payload: {error}; body: {}",
            body_preview(body.as_ref())
        ))
    })
}

fn map_transport_error(error: reqwest::Error) -> TextGenerationError {
    if error.is_timeout() {
        TextGenerationError::timeout(error.to_string())
    } else {
        TextGenerationError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TextGenerationError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            TextGenerationError::timeout(message)
        }
        _ if status.is_client_error() => TextGenerationError::rejected(message),
        _ => TextGenerationError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
