//! Boolean component.
//!
//! Accepted inputs:
//!
//! | Input | Result |
//! |---|---|
//! | `Boolean(b)` | `b` |
//! | `Integer(1)`, `Float(1.0)` | `true` |
//! | `Integer(0)`, `Float(0.0)` | `false` |
//! | `Text`, case-insensitive `"on"` or `"true"` | `true` |
//! | `Text`, case-insensitive `"false"` | `false` |
//!
//! Anything else, including the strings `"1"`, `"0"` and `"off"`, is
//! [`FieldError::NotABoolean`].

use std::borrow::Borrow;

use super::checked;
use crate::error::FieldError;
use crate::fields::{self, FieldSource};
use crate::foundation::Rules;
use crate::value::Value;

/// Converts `value` to a `bool`.
pub fn coerce_bool(value: &Value) -> Result<bool, FieldError> {
    match value {
        Value::Boolean(b) => Ok(*b),
        Value::Integer(1) => Ok(true),
        Value::Integer(0) => Ok(false),
        Value::Float(f) if *f == 1.0 => Ok(true),
        Value::Float(f) if *f == 0.0 => Ok(false),
        Value::Text(s) if s.eq_ignore_ascii_case("on") || s.eq_ignore_ascii_case("true") => {
            Ok(true)
        }
        Value::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(FieldError::NotABoolean {
            found: value.kind(),
        }),
    }
}

/// Coerces `value` and runs `rules` against the result.
///
/// # Examples
///
/// ```
/// use field_validator::{Value, coerce::validate_bool};
/// use field_validator::validators::is_true;
///
/// assert_eq!(validate_bool(&Value::from("ON"), &[&is_true()]), Ok(true));
/// assert!(validate_bool(&Value::from(0), &[&is_true()]).is_err());
/// ```
pub fn validate_bool(value: &Value, rules: &Rules<'_, bool>) -> Result<bool, FieldError> {
    checked(coerce_bool(value)?, rules)
}

/// Looks up `key` in `source` and validates it as a `bool`.
pub fn validate_map_bool<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, bool>,
) -> Result<bool, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    validate_bool(field.borrow(), rules)
}

/// Like [`validate_map_bool`], but an absent key yields `false`.
///
/// Rules are not run against the substituted `false`.
pub fn validate_map_bool_or_false<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, bool>,
) -> Result<bool, FieldError>
where
    S: FieldSource + ?Sized,
{
    match fields::optional(source, key, "false") {
        Some(field) => validate_bool(field.borrow(), rules),
        None => Ok(false),
    }
}
