//! Per-category event counting.

use std::collections::{BTreeMap, BTreeSet};

use retenza_types::{CategoryId, EventRecord};

/// Match counts for the requested categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    /// Count per requested category. Requested categories with zero
    /// matches are present with a count of 0.
    pub per_category: BTreeMap<CategoryId, u64>,
    /// Sum of the per-category counts.
    pub total: u64,
}

/// Counts events per requested category in one pass over the sample.
///
/// Matching is exact equality on the full identifier; a request for `"10"`
/// never counts events in category `"100"`. An empty request produces an
/// empty mapping and a zero total — it does not widen to all events. A
/// requested category absent from the sample is reported with a count of
/// 0, not an error.
#[must_use]
pub fn filter_by_category(
    events: &[EventRecord],
    categories: &BTreeSet<CategoryId>,
) -> CategoryCounts {
    let zeroed: BTreeMap<CategoryId, u64> =
        categories.iter().cloned().map(|id| (id, 0)).collect();

    let per_category = events.iter().fold(zeroed, |mut counts, event| {
        if let Some(count) = counts.get_mut(&event.category) {
            *count += 1;
        }
        counts
    });

    let total = per_category.values().sum();
    CategoryCounts {
        per_category,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<EventRecord> {
        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let mut events = Vec::new();
        for (id, n) in [("4624", 5u32), ("4625", 3), ("100", 2)] {
            for i in 0..n {
                events.push(EventRecord::new(
                    CategoryId::from(id),
                    ts + chrono::TimeDelta::minutes(i64::from(i)),
                ));
            }
        }
        events
    }

    fn ids(list: &[&str]) -> BTreeSet<CategoryId> {
        list.iter().map(|id| CategoryId::from(*id)).collect()
    }

    #[test]
    fn test_counts_requested_categories() {
        let counts = filter_by_category(&sample(), &ids(&["4624", "4625"]));
        assert_eq!(counts.per_category[&CategoryId::from("4624")], 5);
        assert_eq!(counts.per_category[&CategoryId::from("4625")], 3);
        assert_eq!(counts.total, 8);
    }

    #[test]
    fn test_no_substring_matching() {
        // "10" must not absorb the "100" events.
        let counts = filter_by_category(&sample(), &ids(&["10"]));
        assert_eq!(counts.per_category[&CategoryId::from("10")], 0);
        assert_eq!(counts.total, 0);
    }

    #[test]
    fn test_unmatched_category_is_zero_not_error() {
        let counts = filter_by_category(&sample(), &ids(&["9999"]));
        assert_eq!(counts.per_category.len(), 1);
        assert_eq!(counts.per_category[&CategoryId::from("9999")], 0);
        assert_eq!(counts.total, 0);
    }

    #[test]
    fn test_empty_request_is_empty_result() {
        let counts = filter_by_category(&sample(), &BTreeSet::new());
        assert!(counts.per_category.is_empty());
        assert_eq!(counts.total, 0);
    }

    #[test]
    fn test_partition_covers_total() {
        // Mutually exclusive categories covering the whole sample sum to
        // the sample size.
        let events = sample();
        let counts = filter_by_category(&events, &ids(&["4624", "4625", "100"]));
        assert_eq!(counts.total, events.len() as u64);
    }
}
