//! Log container capacity sample.

use serde::{Deserialize, Serialize};

/// Sizes of the log container at sampling time.
///
/// Either size may be unreported by the collector. Interpreting the pair
/// (capped vs. still-filling log) is the analyzer's job; this type only
/// carries what was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogCapacitySample {
    /// Configured maximum size of the log in bytes.
    pub max_configured_bytes: Option<u64>,
    /// Current on-disk size of the log in bytes.
    pub current_bytes: Option<u64>,
}

impl LogCapacitySample {
    /// Fixed per-log overhead in bytes (container header and metadata, not
    /// event payload). Subtracted before any per-event arithmetic.
    pub const LOG_OVERHEAD_BYTES: u64 = 68_000;

    /// Creates a capacity sample.
    #[must_use]
    pub const fn new(max_configured_bytes: Option<u64>, current_bytes: Option<u64>) -> Self {
        Self {
            max_configured_bytes,
            current_bytes,
        }
    }

    /// Creates a sample where only the configured maximum is known.
    #[must_use]
    pub const fn capped(max_configured_bytes: u64) -> Self {
        Self {
            max_configured_bytes: Some(max_configured_bytes),
            current_bytes: None,
        }
    }

    /// Returns true if neither size was reported.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.max_configured_bytes.is_none() && self.current_bytes.is_none()
    }
}
