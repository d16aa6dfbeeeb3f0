//! Event-log retention storage estimation library.
//!
//! This is a facade crate that re-exports functionality from the retenza
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use retenza_lib::prelude::*;
//! use chrono::{TimeZone, Utc};
//! use std::collections::BTreeSet;
//!
//! fn main() -> Result<()> {
//!     let events = vec![
//!         EventRecord::new("4624".into(), Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()),
//!         EventRecord::new("1000".into(), Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap()),
//!     ];
//!     let input = EstimationInput::new(
//!         events,
//!         LogCapacitySample::capped(15_728_640),
//!         BTreeSet::from([CategoryId::from("4624")]),
//!         RetentionPeriod::new(30)?,
//!     );
//!
//!     let result = estimate(&input)?;
//!     println!("projected: {} bytes", result.projected_total_bytes);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retenza/retenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use retenza_types::*;

// Re-export sample analysis
pub use retenza_sample::{average_event_size, effective_log_size, time_span};

// Re-export projection
pub use retenza_estimate::{
    CategoryCounts, estimate, estimate_rotations, estimate_storage, filter_by_category,
};

// Re-export the event source seam
#[cfg(feature = "source")]
pub use retenza_source::{EventSource, HostId, Snapshot, SnapshotError, SnapshotSource};

// Re-export report writers
#[cfg(feature = "report")]
pub use retenza_report::{
    JsonReport, ReportError, ReportFormat, ReportMeta, ReportSink, TextReport, format_bytes,
    format_span,
};

/// Prelude module for convenient imports.
///
/// ```
/// use retenza_lib::prelude::*;
/// ```
pub mod prelude {
    pub use retenza_types::{
        CategoryId, EstimationInput, EstimationResult, EventRecord, LogCapacitySample, Result,
        RetentionError, RetentionPeriod,
    };

    pub use retenza_estimate::{CategoryCounts, estimate, filter_by_category};
    pub use retenza_sample::{average_event_size, effective_log_size, time_span};

    #[cfg(feature = "source")]
    pub use retenza_source::{EventSource, HostId, Snapshot, SnapshotSource};

    #[cfg(feature = "report")]
    pub use retenza_report::{JsonReport, ReportFormat, ReportMeta, ReportSink, TextReport};
}
