//! Property-based tests for field-validator.

use field_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// NATIVE VALUES PASS THROUGH UNCHANGED
// ============================================================================

proptest! {
    #[test]
    fn native_bool_round_trips(b in any::<bool>()) {
        prop_assert_eq!(validate_bool(&Value::Boolean(b), &[]), Ok(b));
    }

    #[test]
    fn native_int_round_trips(n in any::<i64>()) {
        prop_assert_eq!(validate_int(&Value::Integer(n), &[]), Ok(n));
    }

    #[test]
    fn native_float_round_trips(f in any::<f64>().prop_filter("NaN never equals itself", |f| !f.is_nan())) {
        prop_assert_eq!(validate_float(&Value::Float(f), &[]), Ok(f));
    }

    #[test]
    fn native_string_round_trips(s in ".*") {
        prop_assert_eq!(validate_string(&Value::from(s.as_str()), &[]), Ok(s));
    }
}

// ============================================================================
// NUMERIC NORMALIZATION
// ============================================================================

proptest! {
    /// Integers up to 2^53 survive the trip through f64 exactly.
    #[test]
    fn integral_float_matches_integer(n in -(1_i64 << 53)..=(1_i64 << 53)) {
        let widened = n as f64;
        prop_assert_eq!(coerce_int(&Value::Float(widened)), coerce_int(&Value::Integer(n)));
        prop_assert_eq!(coerce_float(&Value::Integer(n)), Ok(widened));
    }

    #[test]
    fn fractional_float_is_not_an_int(n in -1_000_000_i64..1_000_000, frac in 0.01_f64..0.99) {
        let f = n as f64 + frac;
        prop_assert_eq!(coerce_int(&Value::Float(f)).unwrap_err().kind(), ErrorKind::NotAnInteger);
    }

    #[test]
    fn decimal_text_parses_like_native(n in any::<i64>()) {
        prop_assert_eq!(coerce_and_validate_int(&Value::from(n.to_string()), &[]), Ok(n));
    }

    #[test]
    fn float_text_parses_like_native(f in -1e12_f64..1e12) {
        prop_assert_eq!(coerce_and_validate_float(&Value::from(f.to_string()), &[]), Ok(f));
    }
}

// ============================================================================
// STRING FORMATTING
// ============================================================================

proptest! {
    #[test]
    fn integer_text_matches_display(n in any::<i64>()) {
        prop_assert_eq!(coerce_string(&Value::Integer(n)), Ok(n.to_string()));
    }

    #[test]
    fn float_text_parses_back(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let text = coerce_string(&Value::Float(f)).unwrap();
        prop_assert!(!text.contains('e'));
        prop_assert_eq!(text.parse::<f64>().unwrap(), f);
    }
}

// ============================================================================
// RULES
// ============================================================================

proptest! {
    #[test]
    fn bounds_agree_with_comparison(n in any::<i64>(), lo in any::<i64>(), hi in any::<i64>()) {
        let ok = validate_int(&Value::Integer(n), &[&min(lo), &max(hi)]).is_ok();
        prop_assert_eq!(ok, lo <= n && n <= hi);
    }

    #[test]
    fn length_bounds_count_chars(s in ".{0,20}", limit in 0_usize..20) {
        let chars = s.chars().count();
        prop_assert_eq!(max_length(limit).validate(s.as_str()).is_ok(), chars <= limit);
        prop_assert_eq!(min_length(limit).validate(s.as_str()).is_ok(), chars >= limit);
    }

    #[test]
    fn email_is_deterministic(s in ".*") {
        prop_assert_eq!(email().validate(s.as_str()).is_ok(), email().validate(s.as_str()).is_ok());
    }

    #[test]
    fn word_without_at_is_never_an_email(s in "[a-zA-Z0-9._-]{0,30}") {
        prop_assert!(email().validate(s.as_str()).is_err());
    }
}
