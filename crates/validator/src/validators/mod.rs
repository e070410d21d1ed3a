//! Built-in rules
//!
//! Every rule validates an already-normalized value: `bool`, `i64`, `f64`,
//! `str`, `DateTime<Utc>` or `Uuid`. Pass them to the `validate_*` functions
//! as an ordered slice; the first failing rule wins.
//!
//! # Categories
//!
//! - **Boolean**: [`IsTrue`], [`IsFalse`]
//! - **Numeric**: [`Min`], [`Max`] (for both `i64` and `f64`)
//! - **String**: [`MinLength`], [`MaxLength`], [`Email`], [`Phone`]
//! - **Time**: `MinTime`, `MaxTime` (feature `temporal`)
//! - **UUID**: `UuidVersion`, `NotNil` (feature `uuid`)
//!
//! # Examples
//!
//! ```
//! use field_validator::validators::{email, max_length};
//! use field_validator::foundation::validate_in_order;
//!
//! assert!(validate_in_order("john@doe.com", &[&max_length(64), &email()]).is_ok());
//! ```

// Boolean rules
pub mod boolean;

// Numeric rules
pub mod range;

// String rules
pub mod email;
pub mod length;
pub mod phone;

// Time rules
#[cfg(feature = "temporal")]
pub mod time;

// UUID rules
#[cfg(feature = "uuid")]
pub mod uuid;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use boolean::{IsFalse, IsTrue, is_false, is_true};
pub use email::{Address, Email, email, parse_address};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use phone::{Phone, PhoneNumber, phone};
pub use range::{Max, Min, max, min};

#[cfg(feature = "temporal")]
pub use time::{MaxTime, MinTime, max_time, min_time};

#[cfg(feature = "uuid")]
pub use self::uuid::{NotNil, UuidVersion, not_nil, uuid_version};
