//! UUID component.
//!
//! UUID values pass through. Text is parsed in any layout [`Uuid::parse_str`]
//! accepts (hyphenated, simple, braced or `urn:uuid:`); unparseable text is
//! [`FieldError::InvalidUuid`]. Anything else is
//! [`FieldError::NotAStringOrUuid`].

use std::borrow::Borrow;

use uuid::Uuid;

use super::checked;
use crate::error::FieldError;
use crate::fields::{self, FieldSource};
use crate::foundation::Rules;
use crate::value::Value;

/// Converts `value` to a [`Uuid`].
pub fn coerce_uuid(value: &Value) -> Result<Uuid, FieldError> {
    match value {
        Value::Uuid(id) => Ok(*id),
        Value::Text(text) => {
            Uuid::parse_str(text).map_err(|source| FieldError::InvalidUuid { source })
        }
        other => Err(FieldError::NotAStringOrUuid {
            found: other.kind(),
        }),
    }
}

/// Coerces `value` and runs `rules` against the result.
///
/// # Examples
///
/// ```
/// use field_validator::{Value, coerce::validate_uuid};
/// use field_validator::validators::{not_nil, uuid_version};
///
/// let id = uuid::Uuid::new_v4();
///
/// assert_eq!(validate_uuid(&Value::from(id.to_string()), &[&uuid_version(4)]), Ok(id));
/// assert!(validate_uuid(&Value::from(uuid::Uuid::nil()), &[&not_nil()]).is_err());
/// ```
pub fn validate_uuid(value: &Value, rules: &Rules<'_, Uuid>) -> Result<Uuid, FieldError> {
    checked(coerce_uuid(value)?, rules)
}

/// Looks up `key` in `source` and validates it as a [`Uuid`].
pub fn validate_map_uuid<S>(
    key: &str,
    source: &S,
    rules: &Rules<'_, Uuid>,
) -> Result<Uuid, FieldError>
where
    S: FieldSource + ?Sized,
{
    let field = fields::required(source, key)?;
    validate_uuid(field.borrow(), rules)
}
