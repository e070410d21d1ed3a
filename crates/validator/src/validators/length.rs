//! String length rules
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) {
        ValidationError::new(
            "min_length",
            format!("value length must not be less than {}", self.min),
        )
        .with_param("min", self.min.to_string())
        .with_param("actual", char_len(input).to_string())
    }
    fn min_length(min: usize);
}

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) {
        ValidationError::new(
            "max_length",
            format!("value length must not be greater than {}", self.max),
        )
        .with_param("max", self.max.to_string())
        .with_param("actual", char_len(input).to_string())
    }
    fn max_length(max: usize);
}
