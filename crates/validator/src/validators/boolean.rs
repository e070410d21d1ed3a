//! Boolean rules

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a boolean value is `true`.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::new("is_true", "value must be true") }
    fn is_true();
}

crate::validator! {
    /// Validates that a boolean value is `false`.
    pub IsFalse for bool;
    rule(input) { !*input }
    error(input) { ValidationError::new("is_false", "value must be false") }
    fn is_false();
}
