//! Timestamp component.
//!
//! Timestamps pass through. Text must be a calendar date in exactly the
//! `YYYY-MM-DD` form and becomes midnight UTC on that date. Everything else,
//! including text with a time part, is [`FieldError::NotATimestamp`].

use std::borrow::Borrow;

use chrono::{DateTime, NaiveDate, Utc};

use super::checked;
use crate::error::FieldError;
use crate::fields::{self, FieldSource};
use crate::foundation::Rules;
use crate::value::Value;

/// Converts `value` to a UTC timestamp.
pub fn coerce_time(value: &Value) -> Result<DateTime<Utc>, FieldError> {
    let not_a_timestamp = || FieldError::NotATimestamp {
        found: value.kind(),
    };
    match value {
        Value::Timestamp(at) => Ok(*at),
        Value::Text(text) => parse_date(text).ok_or_else(not_a_timestamp),
        _ => Err(not_a_timestamp()),
    }
}

/// Parses a `YYYY-MM-DD` date to midnight UTC.
///
/// Returns `None` for any other layout or for dates that do not exist.
///
/// ```
/// use field_validator::coerce::parse_date;
///
/// let at = parse_date("2023-12-24").unwrap();
/// assert_eq!(at.to_rfc3339(), "2023-12-24T00:00:00+00:00");
///
/// assert!(parse_date("2023-02-30").is_none());
/// assert!(parse_date("2023-12-24T10:00:00Z").is_none());
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let century = parse_two_digits(bytes, 0)?;
    let year = i32::from(century) * 100 + i32::from(parse_two_digits(bytes, 2)?);
    let month = parse_two_digits(bytes, 5)?;
    let day = parse_two_digits(bytes, 8)?;

    let date = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Parses a two-digit numeric field from a byte slice at the given offset.
fn parse_two_digits(bytes: &[u8], offset: usize) -> Option<u8> {
    let d1 = bytes.get(offset)?.wrapping_sub(b'0');
    let d2 = bytes.get(offset + 1)?.wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Coerces `value` and runs `rules` against the result.
///
/// # Examples
///
/// ```
/// use field_validator::{Value, coerce::{parse_date, validate_time}};
/// use field_validator::validators::{max_time, min_time};
///
/// let christmas_eve = parse_date("2023-12-24").unwrap();
///
/// assert!(validate_time(&Value::from("2023-12-24"), &[&max_time(christmas_eve)]).is_ok());
/// assert!(validate_time(&Value::from("2023-12-23"), &[&min_time(christmas_eve)]).is_err());
/// ```
pub fn validate_time(
    value: &Value,
    rules: &Rules<'_, DateTime<Utc>>,
) -> Result<DateTime<Utc>, FieldError> {
    checked(coerce_time(value)?, rules)
}

/// Looks up `key` in `source` and validates it as a timestamp.
pub fn validate_map_time<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, DateTime<Utc>>,
) -> Result<DateTime<Utc>, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    validate_time(field.borrow(), rules)
}

/// Like [`validate_map_time`], but an absent key yields `Ok(None)`.
///
/// A key that is present with an invalid value is still an error.
pub fn validate_map_time_or_none<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, DateTime<Utc>>,
) -> Result<Option<DateTime<Utc>>, FieldError>
where
    S: FieldSource + ?Sized,
{
    fields::optional(source, key, "none")
        .map(|field| validate_time(field.borrow(), rules))
        .transpose()
}
