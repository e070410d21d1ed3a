//! Integration tests for keyed lookups.

use std::collections::{BTreeMap, HashMap};

use field_validator::prelude::*;
use pretty_assertions::assert_eq;

fn form() -> HashMap<String, Value> {
    HashMap::from([
        ("name".to_owned(), Value::from("Groot")),
        ("age".to_owned(), Value::from(19.0)),
        ("ratio".to_owned(), Value::from("0.75")),
        ("count".to_owned(), Value::from("12")),
        ("active".to_owned(), Value::from("ON")),
        ("broken".to_owned(), Value::Boolean(true)),
    ])
}

#[test]
fn missing_key_names_the_key() {
    let err = validate_map_int("height", &form(), &[]).unwrap_err();
    assert_eq!(err, FieldError::MissingKey { key: "height".to_owned() });
    assert_eq!(err.to_string(), "missing key \"height\"");
}

#[test]
fn every_required_accessor_reports_missing_key() {
    let form = form();
    let kinds = [
        validate_map_bool("x", &form, &[]).unwrap_err().kind(),
        validate_map_int("x", &form, &[]).unwrap_err().kind(),
        coerce_and_validate_map_int("x", &form, &[]).unwrap_err().kind(),
        validate_map_float("x", &form, &[]).unwrap_err().kind(),
        coerce_and_validate_map_float("x", &form, &[]).unwrap_err().kind(),
        validate_map_string("x", &form, &[]).unwrap_err().kind(),
    ];
    assert!(kinds.iter().all(|k| *k == ErrorKind::MissingKey));
}

#[test]
fn present_values_are_coerced_and_checked() {
    let form = form();
    assert_eq!(validate_map_string("name", &form, &[&min_length(3)]).unwrap(), "Groot");
    assert_eq!(validate_map_int("age", &form, &[&min(18)]), Ok(19));
    assert_eq!(coerce_and_validate_map_float("ratio", &form, &[&max(1.0)]), Ok(0.75));
    assert_eq!(coerce_and_validate_map_int("count", &form, &[&max(20)]), Ok(12));
    assert_eq!(validate_map_bool("active", &form, &[&is_true()]), Ok(true));
}

#[test]
fn or_false_substitutes_only_for_absent_keys() {
    let form = form();
    assert_eq!(validate_map_bool_or_false("missing", &form, &[&is_true()]), Ok(false));
    assert_eq!(validate_map_bool_or_false("active", &form, &[]), Ok(true));
    assert_eq!(
        validate_map_bool_or_false("name", &form, &[]).unwrap_err().kind(),
        ErrorKind::NotABoolean
    );
}

#[test]
fn or_none_distinguishes_absent_from_invalid() {
    let form = form();
    assert_eq!(validate_map_string_or_none("nickname", &form, &[]), Ok(None));
    assert_eq!(
        validate_map_string_or_none("name", &form, &[]),
        Ok(Some("Groot".to_owned()))
    );
    assert_eq!(
        validate_map_string_or_none("broken", &form, &[]).unwrap_err().kind(),
        ErrorKind::NotAString
    );
    assert_eq!(
        validate_map_string_or_none("name", &form, &[&max_length(2)])
            .unwrap_err()
            .kind(),
        ErrorKind::RuleViolation
    );
}

#[test]
fn btree_map_and_object_value_are_sources() {
    let map: BTreeMap<String, Value> = form().into_iter().collect();
    assert_eq!(validate_map_int("age", &map, &[]), Ok(19));

    let object = Value::Object(map);
    assert_eq!(validate_map_string("name", &object, &[]).unwrap(), "Groot");
    assert_eq!(
        validate_map_string("name", &Value::Null, &[]).unwrap_err().kind(),
        ErrorKind::MissingKey
    );
}

#[cfg(feature = "json")]
mod json_source {
    use field_validator::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_object_is_a_field_source() {
        let body = json!({
            "retries": 3.0,
            "label": 42,
            "enabled": 1,
            "email": "\"Bruce Banner\"@batman.com"
        });
        let object = body.as_object().unwrap();

        assert_eq!(validate_map_int("retries", object, &[&max(5)]), Ok(3));
        assert_eq!(validate_map_string("label", object, &[]).unwrap(), "42");
        assert_eq!(validate_map_bool("enabled", object, &[]), Ok(true));
        assert!(validate_map_string("email", object, &[&email()]).is_ok());
        assert_eq!(
            validate_map_bool_or_false("absent", object, &[&is_true()]),
            Ok(false)
        );
    }

    #[test]
    fn json_numbers_keep_integer_identity() {
        let body = json!({ "big": 9_007_199_254_740_993_i64 });
        let object = body.as_object().unwrap();
        assert_eq!(validate_map_int("big", object, &[]), Ok(9_007_199_254_740_993));
    }
}
