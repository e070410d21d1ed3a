//! Field-level errors
//!
//! [`FieldError`] is the single failure type returned by every `coerce_*`,
//! `validate_*` and `validate_map_*` function. It covers three stages:
//!
//! 1. **Lookup**: the key is absent from the field source.
//! 2. **Coercion**: the value has the wrong shape for the requested type.
//! 3. **Rules**: the first rule in the chain that rejected the value.

use serde::Serialize;
use thiserror::Error;

use crate::foundation::ValidationError;
use crate::value::ValueKind;

/// Why a field could not be turned into a valid typed value.
///
/// Display output is a short lowercase sentence suitable for end users.
///
/// # Examples
///
/// ```
/// use field_validator::{ErrorKind, FieldError, Value, coerce::coerce_bool};
///
/// let err = coerce_bool(&Value::from("yes")).unwrap_err();
/// assert_eq!(err.to_string(), "value is not a bool");
/// assert_eq!(err.kind(), ErrorKind::NotABoolean);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// The requested key is not present.
    #[error("missing key \"{key}\"")]
    MissingKey { key: String },

    #[error("value is not a bool")]
    NotABoolean { found: ValueKind },

    #[error("value is not a number")]
    NotANumber { found: ValueKind },

    /// A float with a fractional part, or outside the `i64` range.
    #[error("value is not an int")]
    NotAnInteger { value: f64 },

    #[error("value is not a string")]
    NotAString { found: ValueKind },

    #[cfg(feature = "temporal")]
    #[error("value is not a time")]
    NotATimestamp { found: ValueKind },

    #[cfg(feature = "uuid")]
    #[error("value is not a string or UUID")]
    NotAStringOrUuid { found: ValueKind },

    /// Text that does not parse as a UUID.
    #[cfg(feature = "uuid")]
    #[error("value is an invalid UUID")]
    InvalidUuid {
        #[source]
        source: uuid::Error,
    },

    /// The value coerced fine but a rule rejected it.
    #[error(transparent)]
    Rule(#[from] ValidationError),
}

/// Fieldless discriminant of [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    MissingKey,
    NotABoolean,
    NotANumber,
    NotAnInteger,
    NotAString,
    NotATimestamp,
    NotAStringOrUuid,
    InvalidUuid,
    RuleViolation,
}

impl FieldError {
    /// Returns the kind of failure, for matching without payloads.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingKey { .. } => ErrorKind::MissingKey,
            Self::NotABoolean { .. } => ErrorKind::NotABoolean,
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::NotAnInteger { .. } => ErrorKind::NotAnInteger,
            Self::NotAString { .. } => ErrorKind::NotAString,
            #[cfg(feature = "temporal")]
            Self::NotATimestamp { .. } => ErrorKind::NotATimestamp,
            #[cfg(feature = "uuid")]
            Self::NotAStringOrUuid { .. } => ErrorKind::NotAStringOrUuid,
            #[cfg(feature = "uuid")]
            Self::InvalidUuid { .. } => ErrorKind::InvalidUuid,
            Self::Rule(_) => ErrorKind::RuleViolation,
        }
    }

    /// The rule violation, if a rule rejected the value.
    #[must_use]
    pub const fn as_rule(&self) -> Option<&ValidationError> {
        match self {
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn missing_key(key: &str) -> Self {
        Self::MissingKey {
            key: key.to_owned(),
        }
    }
}
