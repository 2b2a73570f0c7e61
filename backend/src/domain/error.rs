//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or terminal output. The message carried by an [`Error`] is the
//! short, non-technical text shown to end users; diagnostic detail is logged
//! where the failure happens and never travels inside the error.

use super::TraceId;

/// User-facing message for a rejected description.
pub const INVALID_DESCRIPTION_MESSAGE: &str = "Invalid description";

/// User-facing message when no JSON object can be located in a completion.
pub const UNPARSEABLE_COMPLETION_MESSAGE: &str = "Failed to parse AI response";

/// User-facing message for every other generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate names. Please try again.";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The provider replied, but the reply held no JSON object.
    UnparseableCompletion,
    /// An unexpected failure: transport, provider, or malformed JSON.
    InternalError,
}

impl ErrorCode {
    /// Snake-case identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::UnparseableCompletion => "unparseable_completion",
            Self::InternalError => "internal_error",
        }
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
/// - `trace_id` is the request identifier in scope at construction, if any.
///
/// # Examples
/// ```
/// use nameforge::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::InvalidRequest, "Invalid description");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "Invalid description");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error, panicking if validation fails.
    ///
    /// Captures the current trace identifier if one is in scope so the error
    /// is correlated automatically.
    ///
    /// # Panics
    /// Panics when `message` is empty or whitespace. All call sites in this
    /// crate pass non-empty constants.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was created.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The rejected-description error.
    #[must_use]
    pub fn invalid_description() -> Self {
        Self::invalid_request(INVALID_DESCRIPTION_MESSAGE)
    }

    /// The no-JSON-in-completion error.
    #[must_use]
    pub fn unparseable_completion() -> Self {
        Self::new(ErrorCode::UnparseableCompletion, UNPARSEABLE_COMPLETION_MESSAGE)
    }

    /// The generic generation failure.
    #[must_use]
    pub fn generation_failed() -> Self {
        Self::internal(GENERATION_FAILED_MESSAGE)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
