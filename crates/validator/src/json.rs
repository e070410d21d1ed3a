//! `serde_json` interop.
//!
//! Decoded JSON converts into [`Value`], and a JSON object can be used
//! directly as a [`FieldSource`].
//!
//! # Examples
//!
//! ```
//! use field_validator::coerce::validate_map_int;
//! use field_validator::validators::max;
//! use serde_json::json;
//!
//! let body = json!({ "retries": 3.0 });
//! let object = body.as_object().unwrap();
//!
//! assert_eq!(validate_map_int("retries", object, &[&max(5)]).unwrap(), 3);
//! ```

use crate::fields::FieldSource;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => from_number(&n),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Number(n) => from_number(n),
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => {
                Self::Object(map.iter().map(|(k, v)| (k.clone(), Self::from(v))).collect())
            }
        }
    }
}

/// Integers that fit `i64` stay integers; everything else becomes a float.
fn from_number(n: &serde_json::Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Integer(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Fields are converted on lookup, so each access builds an owned [`Value`].
impl FieldSource for serde_json::Map<String, serde_json::Value> {
    type Field<'a> = Value;

    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(Value::from(json!(42)), Value::Integer(42));
        assert_eq!(Value::from(json!(-7)), Value::Integer(-7));
        assert_eq!(Value::from(json!(5.0)), Value::Float(5.0));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn test_nested_document() {
        let doc = json!({ "name": "groot", "tags": [1, "two", null] });
        let Value::Object(map) = Value::from(&doc) else {
            panic!("expected object");
        };
        assert_eq!(map["name"], Value::from("groot"));
        assert_eq!(
            map["tags"],
            Value::Array(vec![Value::Integer(1), Value::from("two"), Value::Null])
        );
    }

    #[test]
    fn test_map_field_source() {
        let doc = json!({ "flag": true });
        let object = doc.as_object().unwrap();
        assert_eq!(object.field("flag"), Some(Value::Boolean(true)));
        assert_eq!(object.field("missing"), None);
    }
}
