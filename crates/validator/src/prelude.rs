//! Prelude module for convenient imports.
//!
//! Provides a single `use field_validator::prelude::*;` import that brings
//! in the core types, the built-in rules and the component functions.
//!
//! # Examples
//!
//! ```
//! use field_validator::prelude::*;
//!
//! let n = validate_int(&Value::from(7.0), &[&min(0), &max(10)]).unwrap();
//! assert_eq!(n, 7);
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, values
// ============================================================================

pub use crate::error::{ErrorKind, FieldError};
pub use crate::fields::FieldSource;
pub use crate::foundation::{Rules, Validate, ValidationError, ValidationResult, validate_in_order};
pub use crate::value::{Value, ValueKind};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::{
    Email, IsFalse, IsTrue, Max, MaxLength, Min, MinLength, Phone, email, is_false, is_true, max,
    max_length, min, min_length, phone,
};

#[cfg(feature = "temporal")]
pub use crate::validators::{MaxTime, MinTime, max_time, min_time};

#[cfg(feature = "uuid")]
pub use crate::validators::{NotNil, UuidVersion, not_nil, uuid_version};

// ============================================================================
// COMPONENTS: Coercion and validation per type
// ============================================================================

pub use crate::coerce::{
    coerce_and_validate_float, coerce_and_validate_int, coerce_and_validate_map_float,
    coerce_and_validate_map_int, coerce_bool, coerce_float, coerce_int, coerce_string,
    validate_bool, validate_float, validate_int, validate_map_bool, validate_map_bool_or_false,
    validate_map_float, validate_map_int, validate_map_string, validate_map_string_or_none,
    validate_string,
};

#[cfg(feature = "temporal")]
pub use crate::coerce::{
    coerce_time, parse_date, validate_map_time, validate_map_time_or_none, validate_time,
};

#[cfg(feature = "uuid")]
pub use crate::coerce::{coerce_uuid, validate_map_uuid, validate_uuid};
