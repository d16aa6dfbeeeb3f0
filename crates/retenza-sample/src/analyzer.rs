//! Reductions over the raw event sample.

use chrono::TimeDelta;
use tracing::debug;

use retenza_types::{EventRecord, LogCapacitySample, Result, RetentionError};

/// Computes the portion of log capacity attributable to event payload.
///
/// A log that has not yet filled to its configured cap is sized by its
/// current on-disk bytes, which gives a more accurate (smaller) average
/// event size. A log at or past its cap is capacity-bound and the
/// configured maximum is the correct basis; equality of the two sizes
/// falls to the maximum branch. The fixed container overhead
/// ([`LogCapacitySample::LOG_OVERHEAD_BYTES`]) is subtracted from the
/// chosen basis.
///
/// # Errors
///
/// Returns [`RetentionError::InsufficientData`] when neither size was
/// reported, or when the overhead meets or exceeds the chosen basis.
pub fn effective_log_size(sample: &LogCapacitySample) -> Result<u64> {
    let basis = match (sample.max_configured_bytes, sample.current_bytes) {
        (Some(max), Some(current)) if current < max => current,
        (Some(max), _) => max,
        (None, Some(current)) => current,
        (None, None) => {
            return Err(RetentionError::insufficient(
                "capacity sample reports neither a configured maximum nor a current size",
            ));
        }
    };

    let effective = basis
        .checked_sub(LogCapacitySample::LOG_OVERHEAD_BYTES)
        .filter(|bytes| *bytes > 0)
        .ok_or_else(|| {
            RetentionError::insufficient(format!(
                "log overhead ({} bytes) meets or exceeds reported size ({basis} bytes)",
                LogCapacitySample::LOG_OVERHEAD_BYTES
            ))
        })?;

    debug!(basis, effective, "resolved effective log size");
    Ok(effective)
}

/// Computes the average size of one event in bytes.
///
/// # Errors
///
/// Returns [`RetentionError::EmptySample`] when `event_count` is zero.
/// An empty sample is a hard stop, not a zero-valued average.
pub fn average_event_size(effective_bytes: u64, event_count: u64) -> Result<f64> {
    if event_count == 0 {
        return Err(RetentionError::EmptySample);
    }
    Ok(effective_bytes as f64 / event_count as f64)
}

/// Computes the elapsed time between the oldest and newest sampled events.
///
/// One full scan; input order carries no meaning, so the minimum and
/// maximum timestamps are found in a single pass rather than assuming
/// chronological order. A zero span (all timestamps identical) is a valid
/// result here; the rotation estimator rejects it before dividing.
///
/// # Errors
///
/// Returns [`RetentionError::EmptySample`] when the collection is empty.
pub fn time_span(events: &[EventRecord]) -> Result<TimeDelta> {
    let (oldest, newest) = events
        .iter()
        .map(|event| event.created)
        .fold(None, |bounds, created| match bounds {
            None => Some((created, created)),
            Some((min, max)) => Some((min.min(created), max.max(created))),
        })
        .ok_or(RetentionError::EmptySample)?;

    debug!(%oldest, %newest, "sample timestamp bounds");
    Ok(newest - oldest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use retenza_types::CategoryId;

    fn event_at(ts: DateTime<Utc>) -> EventRecord {
        EventRecord::new(CategoryId::from("1000"), ts)
    }

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_effective_size_uses_current_when_below_max() {
        let sample = LogCapacitySample::new(Some(20_000_000), Some(10_068_000));
        assert_eq!(effective_log_size(&sample).unwrap(), 10_000_000);
    }

    #[test]
    fn test_effective_size_uses_max_when_log_is_full() {
        let sample = LogCapacitySample::new(Some(10_068_000), Some(25_000_000));
        assert_eq!(effective_log_size(&sample).unwrap(), 10_000_000);
    }

    #[test]
    fn test_effective_size_equality_falls_to_max_branch() {
        let sample = LogCapacitySample::new(Some(10_068_000), Some(10_068_000));
        assert_eq!(effective_log_size(&sample).unwrap(), 10_000_000);
    }

    #[test]
    fn test_effective_size_unknown_current_uses_max() {
        // 15 MB configured cap, current size unreported.
        let sample = LogCapacitySample::capped(15_728_640);
        assert_eq!(effective_log_size(&sample).unwrap(), 15_660_640);
    }

    #[test]
    fn test_effective_size_only_current_known() {
        let sample = LogCapacitySample::new(None, Some(1_068_000));
        assert_eq!(effective_log_size(&sample).unwrap(), 1_000_000);
    }

    #[test]
    fn test_effective_size_blank_sample_fails() {
        let sample = LogCapacitySample::new(None, None);
        assert!(matches!(
            effective_log_size(&sample),
            Err(RetentionError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_effective_size_overhead_exceeds_size_fails() {
        let sample = LogCapacitySample::capped(50_000);
        assert!(matches!(
            effective_log_size(&sample),
            Err(RetentionError::InsufficientData { .. })
        ));
        // Exactly consumed by overhead is just as unusable.
        let sample = LogCapacitySample::capped(68_000);
        assert!(matches!(
            effective_log_size(&sample),
            Err(RetentionError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_average_event_size() {
        assert!((average_event_size(10_000_000, 1_000).unwrap() - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_times_count_recovers_effective_size() {
        let effective = 15_660_640u64;
        let count = 733u64;
        let avg = average_event_size(effective, count).unwrap();
        assert!((avg * count as f64 - effective as f64).abs() < 1e-6);
    }

    #[test]
    fn test_average_event_size_empty_sample_fails() {
        assert!(matches!(
            average_event_size(10_000_000, 0),
            Err(RetentionError::EmptySample)
        ));
    }

    #[test]
    fn test_time_span_unordered_input() {
        let events = vec![event_at(ts(5, 12)), event_at(ts(1, 0)), event_at(ts(11, 0))];
        assert_eq!(time_span(&events).unwrap(), TimeDelta::days(10));
    }

    #[test]
    fn test_time_span_invariant_under_shuffling() {
        let mut events = vec![
            event_at(ts(2, 3)),
            event_at(ts(9, 18)),
            event_at(ts(1, 1)),
            event_at(ts(6, 0)),
        ];
        let forward = time_span(&events).unwrap();
        events.reverse();
        assert_eq!(time_span(&events).unwrap(), forward);
        events.swap(0, 2);
        assert_eq!(time_span(&events).unwrap(), forward);
    }

    #[test]
    fn test_time_span_identical_timestamps_is_zero() {
        let events = vec![event_at(ts(1, 0)); 3];
        assert_eq!(time_span(&events).unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_time_span_empty_fails() {
        assert!(matches!(time_span(&[]), Err(RetentionError::EmptySample)));
    }
}
