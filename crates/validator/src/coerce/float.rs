//! Float component.
//!
//! Integers are widened to `f64`; floats pass through. Everything else is
//! [`FieldError::NotANumber`].

use std::borrow::Borrow;

use super::{checked, parse_float};
use crate::error::FieldError;
use crate::fields::{self, FieldSource};
use crate::foundation::Rules;
use crate::value::Value;

/// Converts `value` to an `f64`.
pub fn coerce_float(value: &Value) -> Result<f64, FieldError> {
    match value {
        Value::Integer(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(FieldError::NotANumber {
            found: other.kind(),
        }),
    }
}

/// Coerces `value` and runs `rules` against the result.
pub fn validate_float(value: &Value, rules: &Rules<'_, f64>) -> Result<f64, FieldError> {
    checked(coerce_float(value)?, rules)
}

/// Like [`validate_float`], but numeric text is parsed first.
///
/// Text that does not parse falls through to the strict coercion and fails
/// with [`FieldError::NotANumber`].
///
/// # Examples
///
/// ```
/// use field_validator::{Value, coerce::coerce_and_validate_float};
/// use field_validator::validators::max;
///
/// assert_eq!(coerce_and_validate_float(&Value::from("2.5"), &[&max(3.0)]), Ok(2.5));
/// assert!(coerce_and_validate_float(&Value::from("2.5kg"), &[]).is_err());
/// ```
pub fn coerce_and_validate_float(
    value: &Value,
    rules: &Rules<'_, f64>,
) -> Result<f64, FieldError> {
    if let Value::Text(text) = value
        && let Some(f) = parse_float(text)
    {
        return checked(f, rules);
    }
    validate_float(value, rules)
}

/// Looks up `key` in `source` and validates it as an `f64`.
pub fn validate_map_float<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, f64>,
) -> Result<f64, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    validate_float(field.borrow(), rules)
}

/// Looks up `key` in `source` and validates it with [`coerce_and_validate_float`].
pub fn coerce_and_validate_map_float<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, f64>,
) -> Result<f64, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    coerce_and_validate_float(field.borrow(), rules)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::validators::{max, min};

    #[test]
    fn test_integer_widens() {
        assert_eq!(coerce_float(&Value::Integer(3)), Ok(3.0));
        assert_eq!(coerce_float(&Value::Float(3.25)), Ok(3.25));
    }

    #[test]
    fn test_not_a_number() {
        let err = coerce_float(&Value::from("3.25")).unwrap_err();
        assert_eq!(err.to_string(), "value is not a number");
        assert!(coerce_float(&Value::Null).is_err());
    }

    #[test]
    fn test_string_pre_parsing() {
        assert_eq!(coerce_and_validate_float(&Value::from("1e3"), &[]), Ok(1000.0));
        assert_eq!(coerce_and_validate_float(&Value::from(7), &[]), Ok(7.0));
        assert!(matches!(
            coerce_and_validate_float(&Value::from("abc"), &[]),
            Err(FieldError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_bounds() {
        let rules: &Rules<'_, f64> = &[&min(0.0), &max(1.0)];
        assert_eq!(validate_float(&Value::from(0.5), rules), Ok(0.5));

        let err = validate_float(&Value::from(1.5), rules).unwrap_err();
        assert_eq!(err.to_string(), "value must not be greater than 1");
        assert_eq!(
            validate_float(&Value::from(-0.5), rules).unwrap_err().to_string(),
            "value must not be less than 0"
        );
    }

    #[test]
    fn test_map_accessors() {
        let source = BTreeMap::from([("ratio".to_owned(), Value::from("0.25"))]);
        assert_eq!(coerce_and_validate_map_float("ratio", &source, &[]), Ok(0.25));
        assert!(validate_map_float("ratio", &source, &[]).is_err());
        assert!(matches!(
            validate_map_float("missing", &source, &[]),
            Err(FieldError::MissingKey { .. })
        ));
    }
}
