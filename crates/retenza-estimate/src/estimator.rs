//! Rotation and storage projection.

use chrono::TimeDelta;
use tracing::debug;

use retenza_sample::{average_event_size, effective_log_size, time_span};
use retenza_types::{EstimationInput, EstimationResult, Result, RetentionError, RetentionPeriod};

use crate::filter::filter_by_category;

/// Estimates how many times the sampled log window repeats across the
/// retention period.
///
/// Both quantities are expressed in seconds before dividing. The result is
/// deliberately not rounded; a fractional rotation is a partial log fill
/// and carries straight into the storage projection.
///
/// # Errors
///
/// Returns [`RetentionError::ZeroSpan`] when the sample span is zero —
/// every sampled event shares one timestamp, and no rotation rate can be
/// extrapolated from a single instant.
pub fn estimate_rotations(retention: RetentionPeriod, sample_span: TimeDelta) -> Result<f64> {
    if sample_span.is_zero() {
        return Err(RetentionError::ZeroSpan);
    }
    // Full precision: a sub-millisecond span is non-zero and must not
    // truncate to a zero divisor.
    let span_seconds =
        sample_span.num_seconds() as f64 + f64::from(sample_span.subsec_nanos()) / 1e9;
    Ok(retention.seconds() as f64 / span_seconds)
}

/// Projects storage bytes as `event_count x avg_event_bytes x rotations`.
///
/// Pure arithmetic with no validation; callers keep the inputs
/// non-negative upstream.
#[must_use]
pub fn estimate_storage(event_count: u64, avg_event_bytes: f64, rotations: f64) -> u64 {
    (event_count as f64 * avg_event_bytes * rotations) as u64
}

/// Runs one full estimation over already-fetched data.
///
/// Derives the sample statistics, extrapolates the rotation rate, counts
/// the requested categories, and produces both storage projections. There
/// is no partial result: any failure aborts the whole estimation and
/// nothing is substituted with a default.
///
/// # Errors
///
/// Propagates [`RetentionError::EmptySample`],
/// [`RetentionError::InsufficientData`], and [`RetentionError::ZeroSpan`]
/// from the underlying steps.
pub fn estimate(input: &EstimationInput) -> Result<EstimationResult> {
    let total_events = input.events.len() as u64;

    let effective_bytes = effective_log_size(&input.capacity)?;
    let avg_event_bytes = average_event_size(effective_bytes, total_events)?;
    let sample_span = time_span(&input.events)?;
    let rotations = estimate_rotations(input.retention, sample_span)?;
    debug!(
        total_events,
        avg_event_bytes, rotations, "derived sample statistics"
    );

    let counts = filter_by_category(&input.events, &input.categories);

    Ok(EstimationResult {
        avg_event_bytes,
        sample_span,
        rotations,
        total_events,
        projected_total_bytes: estimate_storage(total_events, avg_event_bytes, rotations),
        projected_filtered_bytes: estimate_storage(counts.total, avg_event_bytes, rotations),
        filtered_events: counts.total,
        category_counts: counts.per_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{DateTime, TimeZone, Utc};
    use retenza_types::{CategoryId, EventRecord, LogCapacitySample};
    use std::collections::BTreeSet;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap()
    }

    /// 1,000 events spanning 10 days; 200 of them in category 4624. The
    /// capacity sample resolves to an effective size of 10,000,000 bytes.
    fn scenario_input(categories: &[&str]) -> EstimationInput {
        let mut events = Vec::with_capacity(1_000);
        for i in 0..1_000u32 {
            let category = if i < 200 { "4624" } else { "1000" };
            // Oldest at day 1, newest at day 11, rest in between.
            let created = match i {
                0 => ts(1),
                1 => ts(11),
                _ => ts(2 + (i % 9)),
            };
            events.push(EventRecord::new(CategoryId::from(category), created));
        }
        EstimationInput::new(
            events,
            LogCapacitySample::capped(10_068_000),
            categories.iter().map(|id| CategoryId::from(*id)).collect(),
            RetentionPeriod::new(30).unwrap(),
        )
    }

    #[test]
    fn test_rotations_thirty_days_over_ten_day_span() {
        let rotations =
            estimate_rotations(RetentionPeriod::new(30).unwrap(), TimeDelta::days(10)).unwrap();
        assert_relative_eq!(rotations, 3.0);
    }

    #[test]
    fn test_rotations_fractional() {
        let rotations =
            estimate_rotations(RetentionPeriod::new(7).unwrap(), TimeDelta::days(10)).unwrap();
        assert_relative_eq!(rotations, 0.7);
    }

    #[test]
    fn test_rotations_submillisecond_span() {
        let rotations = estimate_rotations(
            RetentionPeriod::new(30).unwrap(),
            TimeDelta::microseconds(500),
        )
        .unwrap();
        assert!(rotations.is_finite());
        assert_relative_eq!(rotations, 5.184e9);
    }

    #[test]
    fn test_rotations_zero_span_fails() {
        assert!(matches!(
            estimate_rotations(RetentionPeriod::new(30).unwrap(), TimeDelta::zero()),
            Err(RetentionError::ZeroSpan)
        ));
    }

    #[test]
    fn test_storage_projection() {
        assert_eq!(estimate_storage(1_000, 10_000.0, 3.0), 30_000_000);
        assert_eq!(estimate_storage(200, 10_000.0, 3.0), 6_000_000);
    }

    #[test]
    fn test_storage_monotonic_in_each_argument() {
        let base = estimate_storage(500, 2_048.0, 1.5);
        assert!(estimate_storage(501, 2_048.0, 1.5) >= base);
        assert!(estimate_storage(500, 2_049.0, 1.5) >= base);
        assert!(estimate_storage(500, 2_048.0, 1.6) >= base);
    }

    #[test]
    fn test_full_estimation_all_events() {
        let result = estimate(&scenario_input(&["4624"])).unwrap();
        assert_relative_eq!(result.avg_event_bytes, 10_000.0);
        assert_eq!(result.sample_span, TimeDelta::days(10));
        assert_relative_eq!(result.rotations, 3.0);
        assert_eq!(result.total_events, 1_000);
        assert_eq!(result.projected_total_bytes, 30_000_000);
    }

    #[test]
    fn test_full_estimation_filtered() {
        let result = estimate(&scenario_input(&["4624"])).unwrap();
        assert_eq!(result.filtered_events, 200);
        assert_eq!(result.category_counts[&CategoryId::from("4624")], 200);
        assert_eq!(result.projected_filtered_bytes, 6_000_000);
    }

    #[test]
    fn test_full_estimation_unmatched_filter() {
        let result = estimate(&scenario_input(&["7777"])).unwrap();
        assert_eq!(result.filtered_events, 0);
        assert_eq!(result.category_counts[&CategoryId::from("7777")], 0);
        assert_eq!(result.projected_filtered_bytes, 0);
        assert_eq!(result.projected_total_bytes, 30_000_000);
    }

    #[test]
    fn test_full_estimation_empty_events_fails() {
        let input = EstimationInput::new(
            Vec::new(),
            LogCapacitySample::capped(10_068_000),
            BTreeSet::new(),
            RetentionPeriod::new(30).unwrap(),
        );
        assert!(matches!(estimate(&input), Err(RetentionError::EmptySample)));
    }

    #[test]
    fn test_full_estimation_single_instant_fails() {
        let events = vec![EventRecord::new(CategoryId::from("1000"), ts(1)); 10];
        let input = EstimationInput::new(
            events,
            LogCapacitySample::capped(10_068_000),
            BTreeSet::new(),
            RetentionPeriod::new(30).unwrap(),
        );
        assert!(matches!(estimate(&input), Err(RetentionError::ZeroSpan)));
    }
}
