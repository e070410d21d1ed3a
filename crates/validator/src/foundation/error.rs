//! Error type for rule violations
//!
//! A rule that rejects an otherwise well-typed value reports a
//! [`ValidationError`]: a stable machine-readable code, the human-readable
//! message, and the rule parameters that were violated.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured rule violation.
///
/// # Examples
///
/// ```
/// use field_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("max", "value must not be greater than 10")
///     .with_param("max", "10");
///
/// assert_eq!(error.to_string(), "value must not be greater than 10");
/// assert_eq!(error.param("max"), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "max", "min_length", "email"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Parameters of the violated rule, in insertion order.
    ///
    /// Typically 0-2 entries, e.g. `[("max", "10")]`.
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// ```
    /// use field_validator::foundation::ValidationError;
    ///
    /// // Static strings, no allocation:
    /// let error = ValidationError::new("is_true", "value must be true");
    ///
    /// // Dynamic strings allocate:
    /// let error = ValidationError::new("max", format!("value must not be greater than {}", 5));
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

/// Only the message is displayed; code and params stay available as data.
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::new("min", "value must not be less than 3").with_param("min", "3");
        assert_eq!(error.to_string(), "value must not be less than 3");
    }

    #[test]
    fn test_param_lookup() {
        let error = ValidationError::new("max_length", "too long")
            .with_param("max", "5")
            .with_param("actual", "9");

        assert_eq!(error.param("max"), Some("5"));
        assert_eq!(error.param("actual"), Some("9"));
        assert_eq!(error.param("min"), None);
    }

    #[test]
    fn test_static_strings_are_borrowed() {
        let error = ValidationError::new("email", "value is not an email");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
