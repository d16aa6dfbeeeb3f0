//! Error types for retenza.

use thiserror::Error;

/// Result type alias for retenza operations.
pub type Result<T> = std::result::Result<T, RetentionError>;

/// Errors that can occur while deriving an estimate from a log sample.
///
/// All variants are data-validity errors detected synchronously; none are
/// transient, and none are recovered from. An estimation either completes
/// in full or aborts with one of these.
#[derive(Error, Debug)]
pub enum RetentionError {
    /// The event collection is empty; no average size or time span can be
    /// derived from it.
    #[error("Event sample is empty")]
    EmptySample,

    /// The capacity sample does not carry enough information to compute an
    /// effective log size.
    #[error("Insufficient capacity data: {reason}")]
    InsufficientData {
        /// What was missing or inconsistent.
        reason: String,
    },

    /// Every sampled event shares one timestamp; a rotation rate cannot be
    /// extrapolated from a zero-length window.
    #[error("Sample time span is zero; all events share one timestamp")]
    ZeroSpan,

    /// The requested retention period is zero or negative.
    #[error("Invalid retention period: {days} days (must be > 0)")]
    InvalidRetention {
        /// The rejected day count.
        days: i64,
    },

    /// Reading the event snapshot failed.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Writing the report failed.
    #[error("Report error: {0}")]
    Report(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RetentionError {
    /// Builds an [`InsufficientData`](Self::InsufficientData) error.
    pub fn insufficient(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RetentionError::EmptySample.to_string(),
            "Event sample is empty"
        );
        assert_eq!(
            RetentionError::InvalidRetention { days: -3 }.to_string(),
            "Invalid retention period: -3 days (must be > 0)"
        );
        assert_eq!(
            RetentionError::insufficient("no sizes reported").to_string(),
            "Insufficient capacity data: no sizes reported"
        );
    }
}
