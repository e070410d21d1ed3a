//! Coercion and validation per target type
//!
//! Every component follows the same pipeline:
//!
//! 1. **Coerce** the untyped [`Value`](crate::Value) into the target type,
//!    failing with a wrong-kind [`FieldError`] when its shape is unsupported.
//! 2. **Validate** the normalized value against an ordered rule chain. The
//!    first failing rule's error is returned and later rules are not run.
//!
//! The `validate_map_*` variants look the value up in a
//! [`FieldSource`](crate::FieldSource) first and fail with
//! [`FieldError::MissingKey`] when it is absent. The `_or_false` and
//! `_or_none` variants substitute a default for an absent key instead.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use field_validator::Value;
//! use field_validator::coerce::{validate_map_int, validate_map_string_or_none};
//! use field_validator::validators::{email, min};
//!
//! let form = HashMap::from([
//!     ("age".to_owned(), Value::from(42.0)),
//!     ("email".to_owned(), Value::from("rocket+groot@gmail.com")),
//! ]);
//!
//! assert_eq!(validate_map_int("age", &form, &[&min(18)]).unwrap(), 42);
//! assert_eq!(
//!     validate_map_string_or_none("nickname", &form, &[&email()]).unwrap(),
//!     None,
//! );
//! ```

use std::borrow::Borrow;

use crate::error::FieldError;
use crate::foundation::{Rules, validate_in_order};

pub mod boolean;
pub mod float;
pub mod integer;
pub mod string;
#[cfg(feature = "temporal")]
pub mod timestamp;
#[cfg(feature = "uuid")]
pub mod uuid;

pub use boolean::{coerce_bool, validate_bool, validate_map_bool, validate_map_bool_or_false};
pub use float::{
    coerce_and_validate_float, coerce_and_validate_map_float, coerce_float, validate_float,
    validate_map_float,
};
pub use integer::{
    coerce_and_validate_int, coerce_and_validate_map_int, coerce_int, validate_int,
    validate_map_int,
};
pub use string::{coerce_string, validate_map_string, validate_map_string_or_none, validate_string};
#[cfg(feature = "temporal")]
pub use timestamp::{
    coerce_time, parse_date, validate_map_time, validate_map_time_or_none, validate_time,
};
#[cfg(feature = "uuid")]
pub use self::uuid::{coerce_uuid, validate_map_uuid, validate_uuid};

/// Runs `rules` against an already-coerced value and hands it back on success.
fn checked<T, B>(value: T, rules: &Rules<'_, B>) -> Result<T, FieldError>
where
    T: Borrow<B>,
    B: ?Sized,
{
    validate_in_order(value.borrow(), rules)?;
    Ok(value)
}

/// Parses numeric text as an `f64`.
///
/// Literals too large for `f64` are rejected instead of rounding to
/// infinity; only a spelled-out `inf` or `infinity` yields an infinite value.
fn parse_float(text: &str) -> Option<f64> {
    let f = text.parse::<f64>().ok()?;
    if f.is_infinite() {
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let spelled = unsigned.eq_ignore_ascii_case("inf")
            || unsigned.eq_ignore_ascii_case("infinity");
        return spelled.then_some(f);
    }
    Some(f)
}
