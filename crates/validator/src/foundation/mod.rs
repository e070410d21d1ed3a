//! Core validation types and traits
//!
//! This module contains the building blocks every component shares:
//!
//! - **Traits**: [`Validate`], the single-method rule capability
//! - **Errors**: [`ValidationError`], what a rule reports when it rejects a value
//! - **Evaluation**: [`validate_in_order`], fail-fast evaluation of a rule chain
//!
//! # Rule chains
//!
//! Rules are plain values. A call receives them as an ordered slice of trait
//! objects, and the first failing rule decides the reported error:
//!
//! ```
//! use field_validator::foundation::{Rules, validate_in_order};
//! use field_validator::validators::{max, min};
//!
//! let rules: &Rules<'_, i64> = &[&min(0), &max(10)];
//!
//! assert!(validate_in_order(&5, rules).is_ok());
//! assert_eq!(validate_in_order(&-1, rules).unwrap_err().code, "min");
//! assert_eq!(validate_in_order(&11, rules).unwrap_err().code, "max");
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

// ============================================================================
// RULE CHAINS
// ============================================================================

/// An ordered chain of rules over normalized values of type `T`.
pub type Rules<'a, T> = [&'a dyn Validate<Input = T>];

/// Runs `rules` against `value` in order, stopping at the first failure.
///
/// Rules after the failing one are never invoked.
pub fn validate_in_order<T: ?Sized>(value: &T, rules: &Rules<'_, T>) -> ValidationResult<()> {
    rules.iter().try_for_each(|rule| rule.validate(value))
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
