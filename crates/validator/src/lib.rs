//! # field-validator
//!
//! Field validation with type coercion for loosely-typed input.
//!
//! Each supported type has a component that first **coerces** an untyped
//! [`Value`] into a normalized Rust value and then runs an ordered list of
//! **rules** against it, stopping at the first failure.
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use field_validator::prelude::*;
//!
//! let form = HashMap::from([
//!     ("age".to_owned(), Value::from("42")),
//!     ("email".to_owned(), Value::from("rocket+groot@gmail.com")),
//!     ("newsletter".to_owned(), Value::from("on")),
//! ]);
//!
//! let age = coerce_and_validate_map_int("age", &form, &[&min(18), &max(130)])?;
//! let address = validate_map_string("email", &form, &[&max_length(254), &email()])?;
//! let newsletter = validate_map_bool_or_false("newsletter", &form, &[])?;
//!
//! assert_eq!((age, address.as_str(), newsletter), (42, "rocket+groot@gmail.com", true));
//! # Ok::<(), FieldError>(())
//! ```
//!
//! ## Components
//!
//! | Type | Coercion | Rules |
//! |---|---|---|
//! | `bool` | [`coerce_bool`](coerce::coerce_bool) | [`IsTrue`](validators::IsTrue), [`IsFalse`](validators::IsFalse) |
//! | `i64` | [`coerce_int`](coerce::coerce_int) | [`Min`](validators::Min), [`Max`](validators::Max) |
//! | `f64` | [`coerce_float`](coerce::coerce_float) | [`Min`](validators::Min), [`Max`](validators::Max) |
//! | `String` | [`coerce_string`](coerce::coerce_string) | [`MinLength`](validators::MinLength), [`MaxLength`](validators::MaxLength), [`Email`](validators::Email), [`Phone`](validators::Phone) |
//! | `DateTime<Utc>` | `coerce_time` | `MinTime`, `MaxTime` |
//! | `Uuid` | `coerce_uuid` | `UuidVersion`, `NotNil` |
//!
//! ## Creating Rules
//!
//! Use the [`validator!`] macro for zero-boilerplate rules,
//! or implement [`Validate`] manually for complex cases.
//!
//! ## Feature Flags
//!
//! - `temporal` (default): timestamp component, via `chrono`
//! - `uuid` (default): UUID component, via `uuid`
//! - `json` (default): `serde_json` conversions and field source

// ValidationError is the fundamental error type for all rules; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod coerce;
pub mod error;
pub mod fields;
pub mod foundation;
#[cfg(feature = "json")]
mod json;
mod macros;
pub mod prelude;
pub mod validators;
pub mod value;

pub use error::{ErrorKind, FieldError};
pub use fields::FieldSource;
pub use foundation::{Rules, Validate, ValidationError, ValidationResult, validate_in_order};
pub use value::{Value, ValueKind};
