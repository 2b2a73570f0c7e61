//! Validated business description submitted for naming.
//!
//! Length is counted in UTF-16 code units, the same unit a browser text
//! area's `maxLength` enforces, so a description accepted by the form is never
//! rejected here.

use std::fmt;

/// Maximum description length in UTF-16 code units.
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// Validation errors for [`BusinessDescription`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptionValidationError {
    /// The description was the empty string.
    #[error("description must not be empty")]
    Empty,
    /// The description exceeded [`MAX_DESCRIPTION_LEN`].
    #[error("description is {length} characters; the limit is {max}")]
    TooLong {
        /// Observed length in UTF-16 code units.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

/// A description of a business or project, between 1 and
/// [`MAX_DESCRIPTION_LEN`] characters.
///
/// Whitespace-only text is accepted: the endpoint only rejects the empty
/// string, and the client is responsible for ignoring blank input.
///
/// # Examples
/// ```
/// use nameforge::domain::BusinessDescription;
///
/// let description = BusinessDescription::new("A bakery for dogs").expect("valid");
/// assert_eq!(description.as_str(), "A bakery for dogs");
/// assert!(BusinessDescription::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessDescription(String);

impl BusinessDescription {
    /// Validate and wrap a description.
    pub fn new(value: impl Into<String>) -> Result<Self, DescriptionValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DescriptionValidationError::Empty);
        }
        let length = value.encode_utf16().count();
        if length > MAX_DESCRIPTION_LEN {
            return Err(DescriptionValidationError::TooLong {
                length,
                max: MAX_DESCRIPTION_LEN,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the description text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for BusinessDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BusinessDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
