//! Integer component.
//!
//! Integers pass through unchanged. A float is accepted when it is integral
//! and inside the `i64` range, so `Float(5.0)` and `Integer(5)` normalize to
//! the same value. A non-integral float is [`FieldError::NotAnInteger`];
//! anything that is not a number at all is [`FieldError::NotANumber`].

use std::borrow::Borrow;

use super::{checked, parse_float};
use crate::error::FieldError;
use crate::fields::{self, FieldSource};
use crate::foundation::Rules;
use crate::value::Value;

/// 2^63: the first float above `i64::MAX`. `-2^63` is `i64::MIN` exactly.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts `value` to an `i64`.
pub fn coerce_int(value: &Value) -> Result<i64, FieldError> {
    match value {
        Value::Integer(i) => Ok(*i),
        Value::Float(f) => integral(*f),
        other => Err(FieldError::NotANumber {
            found: other.kind(),
        }),
    }
}

fn integral(f: f64) -> Result<i64, FieldError> {
    if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
        Ok(f as i64)
    } else {
        Err(FieldError::NotAnInteger { value: f })
    }
}

/// Coerces `value` and runs `rules` against the result.
///
/// # Examples
///
/// ```
/// use field_validator::{ErrorKind, Value, coerce::validate_int};
/// use field_validator::validators::{max, min};
///
/// assert_eq!(validate_int(&Value::from(5.0), &[&min(0), &max(10)]), Ok(5));
/// assert_eq!(
///     validate_int(&Value::from(5.1), &[]).unwrap_err().kind(),
///     ErrorKind::NotAnInteger,
/// );
/// ```
pub fn validate_int(value: &Value, rules: &Rules<'_, i64>) -> Result<i64, FieldError> {
    checked(coerce_int(value)?, rules)
}

/// Like [`validate_int`], but numeric text is parsed first.
///
/// `"5"` and `"5.0"` yield `5`, `"5.1"` is [`FieldError::NotAnInteger`].
/// Text that is not a number falls through to the strict coercion and fails
/// with [`FieldError::NotANumber`].
pub fn coerce_and_validate_int(
    value: &Value,
    rules: &Rules<'_, i64>,
) -> Result<i64, FieldError> {
    if let Value::Text(text) = value {
        // Integer syntax first so large values keep full precision.
        if let Ok(i) = text.parse::<i64>() {
            return checked(i, rules);
        }
        if let Some(f) = parse_float(text) {
            return checked(integral(f)?, rules);
        }
    }
    validate_int(value, rules)
}

/// Looks up `key` in `source` and validates it as an `i64`.
pub fn validate_map_int<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, i64>,
) -> Result<i64, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    validate_int(field.borrow(), rules)
}

/// Looks up `key` in `source` and validates it with [`coerce_and_validate_int`].
pub fn coerce_and_validate_map_int<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, i64>,
) -> Result<i64, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    coerce_and_validate_int(field.borrow(), rules)
}
