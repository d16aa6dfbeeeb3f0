//! Estimation input and result aggregates.

use std::collections::{BTreeMap, BTreeSet};

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::{CategoryId, EventRecord, LogCapacitySample, RetentionPeriod};

/// Everything the estimation core needs for one invocation.
///
/// Built fresh per estimation from externally fetched data and discarded
/// once the result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimationInput {
    /// Sampled event records. Expected non-empty; an empty collection
    /// aborts the estimation.
    pub events: Vec<EventRecord>,
    /// Log container sizes at sampling time.
    pub capacity: LogCapacitySample,
    /// Categories to scope the filtered projection to. Empty means no
    /// filter was requested, which yields a zero filtered total rather
    /// than falling back to all events.
    pub categories: BTreeSet<CategoryId>,
    /// How long collected logs must stay available downstream.
    pub retention: RetentionPeriod,
}

impl EstimationInput {
    /// Creates a new estimation input.
    #[must_use]
    pub const fn new(
        events: Vec<EventRecord>,
        capacity: LogCapacitySample,
        categories: BTreeSet<CategoryId>,
        retention: RetentionPeriod,
    ) -> Self {
        Self {
            events,
            capacity,
            categories,
            retention,
        }
    }
}

/// The estimation core's output: derived sample statistics plus the two
/// storage projections, all in bytes. Callers convert to KB/MB/GB for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Average size of one event in bytes.
    pub avg_event_bytes: f64,
    /// Elapsed time between the oldest and newest sampled events.
    #[serde(with = "span_seconds")]
    pub sample_span: TimeDelta,
    /// How many times the sampled window repeats across the retention
    /// period. Fractional values are meaningful (partial log fill).
    pub rotations: f64,
    /// Total number of sampled events.
    pub total_events: u64,
    /// Match count per requested category. Categories with zero matches
    /// are present with a count of 0.
    pub category_counts: BTreeMap<CategoryId, u64>,
    /// Sum of the per-category match counts.
    pub filtered_events: u64,
    /// Projected storage for all events over the retention period.
    pub projected_total_bytes: u64,
    /// Projected storage for the filtered events over the retention period.
    pub projected_filtered_bytes: u64,
}

/// Serializes the sample span as fractional seconds at nanosecond
/// precision, so sub-millisecond spans survive the round-trip.
mod span_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(
        span: &TimeDelta,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let seconds = span.num_seconds() as f64 + f64::from(span.subsec_nanos()) / 1e9;
        seconds.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeDelta, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Ok(TimeDelta::nanoseconds((seconds * 1e9).round() as i64))
    }
}
