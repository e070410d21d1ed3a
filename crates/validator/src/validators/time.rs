//! Timestamp bound rules.
//!
//! Both bounds are inclusive: a timestamp equal to the bound passes.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::foundation::ValidationError;

fn rfc3339(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// ============================================================================
// MAX TIME
// ============================================================================

crate::validator! {
    /// Validates that a timestamp is not after `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use field_validator::validators::max_time;
    /// use field_validator::foundation::Validate;
    ///
    /// let christmas_eve = Utc.with_ymd_and_hms(2023, 12, 24, 0, 0, 0).unwrap();
    /// let rule = max_time(christmas_eve);
    ///
    /// assert!(rule.validate(&christmas_eve).is_ok());
    /// assert!(rule.validate(&Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap()).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxTime { max: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        let max = rfc3339(&self.max);
        ValidationError::new("max_time", format!("value must not be after {max}"))
            .with_param("max", max)
            .with_param("actual", rfc3339(input))
    }
    fn max_time(max: DateTime<Utc>);
}

// ============================================================================
// MIN TIME
// ============================================================================

crate::validator! {
    /// Validates that a timestamp is not before `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinTime { min: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        let min = rfc3339(&self.min);
        ValidationError::new("min_time", format!("value must not be before {min}"))
            .with_param("min", min)
            .with_param("actual", rfc3339(input))
    }
    fn min_time(min: DateTime<Utc>);
}

// ============================================================================
// TESTS
// ============================================================================
