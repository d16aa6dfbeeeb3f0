//! Event record representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// A single logged event as reported by a collector.
///
/// Records are immutable and externally supplied; the estimation core only
/// reads them. Payload bytes are deliberately absent: per-event size is
/// derived from the log container sizes, not carried per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Category the event belongs to.
    pub category: CategoryId,
    /// Creation timestamp (UTC).
    pub created: DateTime<Utc>,
}

impl EventRecord {
    /// Creates a new event record.
    #[must_use]
    pub const fn new(category: CategoryId, created: DateTime<Utc>) -> Self {
        Self { category, created }
    }
}
