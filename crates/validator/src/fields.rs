//! Keyed field sources
//!
//! The `validate_map_*` functions look fields up through [`FieldSource`]
//! rather than a concrete map type. Lookups may hand back a borrowed
//! [`Value`] or build an owned one, unified through [`Borrow`].

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::FieldError;
use crate::value::Value;

/// A string-keyed collection of untyped fields.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use std::borrow::Borrow;
/// use field_validator::{FieldSource, Value};
///
/// let mut form = HashMap::new();
/// form.insert("age".to_owned(), Value::from(42));
///
/// let age = form.field("age").unwrap();
/// assert_eq!(age.borrow(), &Value::Integer(42));
/// assert!(form.field("name").is_none());
/// ```
pub trait FieldSource {
    /// The looked-up field, which must be borrowable as `&Value`.
    type Field<'a>: Borrow<Value>
    where
        Self: 'a;

    /// Returns the field stored under `key`, or `None` when absent.
    fn field(&self, key: &str) -> Option<Self::Field<'_>>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, Value, S> {
    type Field<'a>
        = &'a Value
    where
        Self: 'a;

    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl FieldSource for BTreeMap<String, Value> {
    type Field<'a>
        = &'a Value
    where
        Self: 'a;

    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Only [`Value::Object`] has fields.
impl FieldSource for Value {
    type Field<'a>
        = &'a Value
    where
        Self: 'a;

    #[inline]
    fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }
}

// ============================================================================
// LOOKUP HELPERS
// ============================================================================

/// Looks up a field that must be present.
pub(crate) fn required<'s, S>(source: &'s S, key: &str) -> Result<S::Field<'s>, FieldError>
where
    S: FieldSource + ?Sized,
{
    source.field(key).ok_or_else(|| {
        tracing::debug!(key, "required field is missing");
        FieldError::missing_key(key)
    })
}

/// Looks up a field that may be absent; `what` names the substituted default.
pub(crate) fn optional<'s, S>(
    source: &'s S,
    key: &str,
    what: &'static str,
) -> Option<S::Field<'s>>
where
    S: FieldSource + ?Sized,
{
    let field = source.field(key);
    if field.is_none() {
        tracing::trace!(key, substituted = what, "optional field is absent");
    }
    field
}
