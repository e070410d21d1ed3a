//! UUID rules.
//!
//! These operate on already-parsed [`uuid::Uuid`] values; string syntax is
//! checked during coercion.

use uuid::Uuid;

use crate::foundation::ValidationError;

// ============================================================================
// UUID VERSION
// ============================================================================

crate::validator! {
    /// Validates that a UUID carries a specific version number (1-8).
    ///
    /// # Examples
    ///
    /// ```
    /// use field_validator::validators::uuid_version;
    /// use field_validator::foundation::Validate;
    ///
    /// let random = uuid::Uuid::new_v4();
    ///
    /// assert!(uuid_version(4).validate(&random).is_ok());
    /// assert!(uuid_version(7).validate(&random).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub UuidVersion { version: usize } for Uuid;
    rule(self, input) { input.get_version_num() == self.version }
    error(self, input) {
        ValidationError::new("uuid_version", format!("UUID version must be {}", self.version))
            .with_param("version", self.version.to_string())
            .with_param("actual", input.get_version_num().to_string())
    }
    fn uuid_version(version: usize);
}

// ============================================================================
// NOT NIL
// ============================================================================

crate::validator! {
    /// Validates that a UUID is not the all-zero nil UUID.
    pub NotNil for Uuid;
    rule(input) { !input.is_nil() }
    error(input) { ValidationError::new("not_nil", "UUID must not be nil") }
    fn not_nil();
}
