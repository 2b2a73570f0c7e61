//! Locate and decode the JSON object inside a provider completion.
//!
//! Providers often wrap the requested JSON in prose or code fences. The
//! object is taken to span from the first `{` to the last `}` in the text.
//! This greedy span mis-extracts when unrelated braces surround the payload;
//! that behaviour is kept as-is so callers see the same results across
//! providers.

use serde_json::Value;

/// Reasons a completion could not be turned into a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// No `{ ... }` span exists in the completion.
    #[error("completion contains no JSON object")]
    NoJsonObject,
    /// A span was found but is not valid JSON.
    #[error("completion JSON is malformed: {message}")]
    MalformedJson {
        /// Parser diagnostic.
        message: String,
    },
}

/// Return the first-brace-to-last-brace span of `text`, if any.
///
/// # Examples
/// ```
/// use nameforge::domain::extract_json_object;
///
/// assert_eq!(extract_json_object("Here you go:\n{\"names\":[]}"), Some("{\"names\":[]}"));
/// assert_eq!(extract_json_object("I cannot help with that"), None);
/// ```
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    text.get(start..=end)
}

/// Extract and parse the JSON object embedded in `text`.
///
/// The parsed value is returned untouched: no field, count, or range checks
/// are applied.
pub fn parse_completion(text: &str) -> Result<Value, CompletionError> {
    let span = extract_json_object(text).ok_or(CompletionError::NoJsonObject)?;
    serde_json::from_str(span).map_err(|err| CompletionError::MalformedJson {
        message: err.to_string(),
    })
}
