//! Retention period validation.

use serde::{Deserialize, Serialize};

use crate::RetentionError;

/// Seconds in one day.
const SECONDS_PER_DAY: i64 = 86_400;

/// A validated retention window in whole days.
///
/// Construction rejects zero and negative day counts, so every value of
/// this type represents a usable projection window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RetentionPeriod(i64);

impl RetentionPeriod {
    /// Creates a retention period, validating that `days > 0`.
    ///
    /// # Errors
    ///
    /// Returns [`RetentionError::InvalidRetention`] when `days <= 0`.
    pub const fn new(days: i64) -> Result<Self, RetentionError> {
        if days <= 0 {
            return Err(RetentionError::InvalidRetention { days });
        }
        Ok(Self(days))
    }

    /// Returns the retention window in days.
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.0
    }

    /// Returns the retention window in seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.0 * SECONDS_PER_DAY
    }
}

impl std::fmt::Display for RetentionPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}

impl TryFrom<i64> for RetentionPeriod {
    type Error = RetentionError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<RetentionPeriod> for i64 {
    fn from(period: RetentionPeriod) -> Self {
        period.days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_days() {
        let period = RetentionPeriod::new(30).unwrap();
        assert_eq!(period.days(), 30);
        assert_eq!(period.seconds(), 2_592_000);
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(matches!(
            RetentionPeriod::new(0),
            Err(RetentionError::InvalidRetention { days: 0 })
        ));
        assert!(matches!(
            RetentionPeriod::new(-7),
            Err(RetentionError::InvalidRetention { days: -7 })
        ));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let ok: RetentionPeriod = serde_json::from_str("14").unwrap();
        assert_eq!(ok.days(), 14);
        assert!(serde_json::from_str::<RetentionPeriod>("0").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RetentionPeriod::new(90).unwrap().to_string(), "90 days");
    }
}
