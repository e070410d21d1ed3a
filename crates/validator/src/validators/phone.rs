//! International phone number rule.
//!
//! Numbers are parsed with the `phonenumber` crate without a default region,
//! so a number is accepted only when it carries its own country calling code.
//! Formatting characters, extensions, `tel:` URIs and vanity letters are all
//! understood by the parser.

use crate::foundation::{Validate, ValidationError};

const MESSAGE: &str = "value is not an international phone number";

// ============================================================================
// PHONE NUMBER RULE
// ============================================================================

/// Validates international phone numbers.
///
/// The failure message is always `"value is not an international phone
/// number"`; the error `code` names the specific problem and parse failures
/// carry the parser's `reason` param.
///
/// # Examples
///
/// ```
/// use field_validator::validators::Phone;
/// use field_validator::foundation::Validate;
///
/// let phone = Phone::international();
/// assert!(phone.validate("+14155551234").is_ok());
/// assert!(phone.validate("+44 20 7123 4567").is_ok());
/// assert!(phone.validate("tel:+1-415-555-1234").is_ok());
/// assert!(phone.validate("4155551234").is_err()); // no country code
///
/// let number = phone.parse("+81 3-1234-5678").unwrap();
/// assert_eq!(number.country_code, 81);
/// assert_eq!(number.national_number, "312345678");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phone {
    min_digits: u8,
    max_digits: u8,
}

/// A phone number split into its country calling code and national digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    /// ITU-T E.164 country calling code, e.g. `44`.
    pub country_code: u16,
    /// National significant number, digits only, leading zeros kept.
    pub national_number: String,
}

impl Phone {
    /// Creates a validator for international numbers.
    ///
    /// The national significant number must have between 2 and 17 digits.
    #[must_use]
    pub fn international() -> Self {
        Self {
            min_digits: 2,
            max_digits: 17,
        }
    }

    /// Sets the minimum number of national digits required.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_digits(mut self, min: u8) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of national digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_digits(mut self, max: u8) -> Self {
        self.max_digits = max;
        self
    }

    /// Parses `input` into a [`PhoneNumber`].
    pub fn parse(&self, input: &str) -> Result<PhoneNumber, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::new("empty_phone", MESSAGE));
        }

        let parsed = phonenumber::parse(None, input).map_err(|err| {
            ValidationError::new("invalid_phone", MESSAGE).with_param("reason", err.to_string())
        })?;

        let national = parsed.national();
        let national_number = format!(
            "{}{}",
            "0".repeat(usize::from(national.zeros())),
            national.value()
        );

        let count = national_number.len();
        if count < usize::from(self.min_digits) {
            return Err(ValidationError::new("phone_too_few_digits", MESSAGE)
                .with_param("min", self.min_digits.to_string())
                .with_param("actual", count.to_string()));
        }
        if count > usize::from(self.max_digits) {
            return Err(ValidationError::new("phone_too_many_digits", MESSAGE)
                .with_param("max", self.max_digits.to_string())
                .with_param("actual", count.to_string()));
        }

        Ok(PhoneNumber {
            country_code: parsed.code().value(),
            national_number,
        })
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::international()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.parse(input).map(drop)
    }
}

/// Creates an international [`Phone`] rule.
#[must_use]
pub fn phone() -> Phone {
    Phone::international()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        let validator = Phone::international();
        for input in [
            "+14155551234",
            "+1 (415) 555-1234",
            "+442071234567",
            "+44 20 7123 4567",
            "+33 1 23 45 67 89",
            "+49 30 123456",
            "+81 3 1234 5678",
            "+7 495 123-45-67",
            "+380 44 123 4567",
            "+1.415.555.1234",
        ] {
            assert!(validator.validate(input).is_ok(), "{input:?} should be valid");
        }
    }

    #[test]
    fn test_extended_forms() {
        let validator = Phone::international();
        for input in [
            "+1 415-555-1234 ext. 5",
            "tel:+1-415-555-1234",
            "+1 800 FLOWERS",
        ] {
            assert!(validator.validate(input).is_ok(), "{input:?} should be valid");
        }
        assert_eq!(
            validator.parse("tel:+1-415-555-1234").unwrap().national_number,
            "4155551234"
        );
        assert_eq!(validator.parse("+1 800 FLOWERS").unwrap().national_number, "8003569377");
    }

    #[test]
    fn test_country_code_split() {
        let validator = Phone::international();
        assert_eq!(validator.parse("+14155551234").unwrap().country_code, 1);
        assert_eq!(validator.parse("+442071234567").unwrap().country_code, 44);
        assert_eq!(validator.parse("+380441234567").unwrap().country_code, 380);
        assert_eq!(
            validator.parse("+380441234567").unwrap().national_number,
            "441234567"
        );
    }

    #[test]
    fn test_missing_country_code() {
        let err = Phone::international().parse("4155551234").unwrap_err();
        assert_eq!(err.code, "invalid_phone");
        assert!(err.param("reason").is_some());
        assert_eq!(err.to_string(), MESSAGE);
    }

    #[test]
    fn test_unknown_country_code() {
        let err = Phone::international().parse("+999 1234567").unwrap_err();
        assert_eq!(err.code, "invalid_phone");
    }

    #[test]
    fn test_not_a_number() {
        assert!(Phone::international().validate("call me").is_err());
    }

    #[test]
    fn test_digit_limits() {
        let strict = Phone::international().min_digits(10).max_digits(10);
        assert!(strict.validate("+14155551234").is_ok());

        let err = strict.parse("+4930123456").unwrap_err();
        assert_eq!(err.code, "phone_too_few_digits");
        assert_eq!(err.param("actual"), Some("8"));

        let err = Phone::international().max_digits(8).parse("+14155551234").unwrap_err();
        assert_eq!(err.code, "phone_too_many_digits");
        assert_eq!(err.param("actual"), Some("10"));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(Phone::international().parse("").unwrap_err().code, "empty_phone");
        assert_eq!(Phone::international().parse("   ").unwrap_err().code, "empty_phone");
    }
}
