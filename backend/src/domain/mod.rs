//! Domain primitives, ports, and the name generation use-case.
//!
//! Purpose: keep validation, prompt construction, and completion parsing free
//! of transport concerns so inbound and outbound adapters stay thin.
//!
//! Public surface:
//! - Error (alias to `error::Error`): user-facing failure with stable code.
//! - BusinessDescription: validated free-text input (1..=300 UTF-16 units).
//! - NameForgeService: implementation of the name suggestion port.
//! - NameSuggestion and friends: typed view of the provider's reply used by
//!   the client; the HTTP path forwards the raw JSON object untouched.

pub mod completion;
pub mod description;
pub mod error;
pub mod name_forge_service;
pub mod ports;
pub mod prompt;
pub mod suggestion;
pub mod trace_id;

pub use self::completion::{CompletionError, extract_json_object, parse_completion};
pub use self::description::{BusinessDescription, DescriptionValidationError, MAX_DESCRIPTION_LEN};
pub use self::error::{
    Error, ErrorCode, ErrorValidationError, GENERATION_FAILED_MESSAGE,
    INVALID_DESCRIPTION_MESSAGE, UNPARSEABLE_COMPLETION_MESSAGE,
};
pub use self::name_forge_service::NameForgeService;
pub use self::prompt::{REQUESTED_NAME_COUNT, render_naming_prompt};
pub use self::suggestion::{DomainAvailability, NameSuggestion, SuggestionList, VibeBand};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
