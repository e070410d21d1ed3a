//! String component.
//!
//! Text passes through. Integers render in decimal (`42` becomes `"42"`).
//! Floats render in the shortest plain decimal form that round-trips, with
//! no trailing `.0` and no exponent (`5.0` becomes `"5"`, `5.1` stays
//! `"5.1"`). Everything else is [`FieldError::NotAString`].

use std::borrow::Borrow;

use super::checked;
use crate::error::FieldError;
use crate::fields::{self, FieldSource};
use crate::foundation::Rules;
use crate::value::Value;

/// Converts `value` to a `String`.
pub fn coerce_string(value: &Value) -> Result<String, FieldError> {
    match value {
        Value::Text(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(format_float(*f)),
        other => Err(FieldError::NotAString {
            found: other.kind(),
        }),
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_owned()
    } else if f.is_infinite() {
        if f.is_sign_positive() { "+Inf" } else { "-Inf" }.to_owned()
    } else {
        f.to_string()
    }
}

/// Coerces `value` and runs `rules` against the result.
///
/// # Examples
///
/// ```
/// use field_validator::{Rules, Value, coerce::validate_string};
/// use field_validator::validators::{email, max_length};
///
/// let rules: &Rules<'_, str> = &[&max_length(32), &email()];
///
/// assert_eq!(
///     validate_string(&Value::from("t'challa@me.com"), rules).unwrap(),
///     "t'challa@me.com",
/// );
/// assert_eq!(
///     validate_string(&Value::from("hoi"), rules).unwrap_err().to_string(),
///     "value is not an email",
/// );
/// ```
pub fn validate_string(value: &Value, rules: &Rules<'_, str>) -> Result<String, FieldError> {
    checked(coerce_string(value)?, rules)
}

/// Looks up `key` in `source` and validates it as a `String`.
pub fn validate_map_string<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, str>,
) -> Result<String, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    validate_string(field.borrow(), rules)
}

/// Like [`validate_map_string`], but an absent key yields `Ok(None)`.
///
/// A key that is present with an invalid value is still an error.
pub fn validate_map_string_or_none<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, str>,
) -> Result<Option<String>, FieldError>
where
    S: FieldSource + ?Sized,
{
    fields::optional(source, key, "none")
        .map(|field| validate_string(field.borrow(), rules))
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::validators::{max_length, min_length, phone};

    #[test]
    fn test_number_formatting() {
        assert_eq!(coerce_string(&Value::Integer(42)), Ok("42".to_owned()));
        assert_eq!(coerce_string(&Value::Integer(-7)), Ok("-7".to_owned()));
        assert_eq!(coerce_string(&Value::Float(5.0)), Ok("5".to_owned()));
        assert_eq!(coerce_string(&Value::Float(5.1)), Ok("5.1".to_owned()));
        assert_eq!(
            coerce_string(&Value::Float(0.1 + 0.2)).unwrap(),
            "0.30000000000000004"
        );
        assert_eq!(
            coerce_string(&Value::Float(1e21)).unwrap(),
            "1000000000000000000000"
        );
        assert_eq!(coerce_string(&Value::Float(f64::INFINITY)).unwrap(), "+Inf");
    }

    #[test]
    fn test_not_a_string() {
        let err = coerce_string(&Value::Boolean(true)).unwrap_err();
        assert_eq!(err.to_string(), "value is not a string");
        assert!(coerce_string(&Value::Null).is_err());
    }

    #[test]
    fn test_length_rules_count_chars() {
        let rules: &Rules<'_, str> = &[&min_length(2), &max_length(4)];
        assert!(validate_string(&Value::from("añb"), rules).is_ok());

        let err = validate_string(&Value::from("abcde"), rules).unwrap_err();
        assert_eq!(err.to_string(), "value length must not be greater than 4");
        let err = validate_string(&Value::from("a"), rules).unwrap_err();
        assert_eq!(err.to_string(), "value length must not be less than 2");
    }

    #[test]
    fn test_number_then_phone() {
        let err = validate_string(&Value::Integer(4_155_551_234), &[&phone()]).unwrap_err();
        assert_eq!(err.to_string(), "value is not an international phone number");
    }

    #[test]
    fn test_or_none() {
        let source = BTreeMap::from([
            ("name".to_owned(), Value::from("groot")),
            ("age".to_owned(), Value::Boolean(false)),
        ]);

        assert_eq!(validate_map_string_or_none("missing", &source, &[]), Ok(None));
        assert_eq!(
            validate_map_string_or_none("name", &source, &[]),
            Ok(Some("groot".to_owned()))
        );
        assert!(validate_map_string_or_none("age", &source, &[]).is_err());
        assert!(matches!(
            validate_map_string("missing", &source, &[]),
            Err(FieldError::MissingKey { .. })
        ));
    }
}
