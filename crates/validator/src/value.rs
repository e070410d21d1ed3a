//! Untyped input values.
//!
//! [`Value`] is what a field looks like before coercion: decoded JSON, form
//! data or any other loosely-typed source. Each component's `coerce_*`
//! function decides which variants it accepts.
//!
//! ```
//! use field_validator::{Value, ValueKind};
//!
//! let v = Value::from(3.5);
//! assert_eq!(v.kind(), ValueKind::Float);
//! assert_eq!(v.kind().to_string(), "float");
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A loosely-typed input value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or explicit null.
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    #[cfg(feature = "temporal")]
    Timestamp(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            #[cfg(feature = "temporal")]
            Self::Timestamp(_) => ValueKind::Timestamp,
            #[cfg(feature = "uuid")]
            Self::Uuid(_) => ValueKind::Uuid,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// The variant of a [`Value`], without its payload.
///
/// Reported in coercion errors to say what was found instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    #[cfg(feature = "temporal")]
    Timestamp,
    #[cfg(feature = "uuid")]
    Uuid,
    Array,
    Object,
}

impl ValueKind {
    /// Lowercase name, as used in messages and serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            #[cfg(feature = "temporal")]
            Self::Timestamp => "timestamp",
            #[cfg(feature = "uuid")]
            Self::Uuid => "uuid",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),+) => {$(
        impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Self::Integer(i64::from(i))
            }
        }
    )+};
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Object(map)
    }
}

#[cfg(feature = "temporal")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value {
    fn from(at: chrono::DateTime<Tz>) -> Self {
        Self::Timestamp(at.with_timezone(&chrono::Utc))
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(id: uuid::Uuid) -> Self {
        Self::Uuid(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind().to_string(), "null");
        assert_eq!(Value::from(true).kind().to_string(), "boolean");
        assert_eq!(Value::from(7_u8).kind(), ValueKind::Integer);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::from(vec![1, 2]).kind(), ValueKind::Array);
    }

    #[test]
    fn test_option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("hi")), Value::Text("hi".to_owned()));
    }

    #[test]
    fn test_kind_name_matches_display() {
        for kind in [ValueKind::Integer, ValueKind::Text, ValueKind::Object] {
            assert_eq!(kind.name(), kind.to_string());
        }
    }

    #[cfg(feature = "temporal")]
    #[test]
    fn test_datetime_normalized_to_utc() {
        use chrono::{FixedOffset, TimeZone, Utc};

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2023, 12, 24, 2, 0, 0).unwrap();
        assert_eq!(
            Value::from(local),
            Value::Timestamp(Utc.with_ymd_and_hms(2023, 12, 24, 0, 0, 0).unwrap())
        );
    }
}
