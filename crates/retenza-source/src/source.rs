//! The event source seam.

use thiserror::Error;

use retenza_types::{EventRecord, LogCapacitySample, RetentionError};

use crate::HostId;

/// Errors that can occur while fetching log data from a host.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot does not carry data for the requested host.
    #[error("Snapshot holds data for host '{found}', not '{requested}'")]
    HostMismatch {
        /// Host the caller asked for.
        requested: HostId,
        /// Host the snapshot was exported from.
        found: HostId,
    },

    /// The snapshot file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not valid JSON.
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<SnapshotError> for RetentionError {
    fn from(err: SnapshotError) -> Self {
        Self::Snapshot(err.to_string())
    }
}

/// Source of event records and capacity metadata for a host's
/// operational log.
///
/// Connectivity and authentication are an implementation's concern; the
/// estimation shell either receives data or an error, never a half-open
/// handle. Implementations over a live collector would query the host
/// directly; [`SnapshotSource`](crate::SnapshotSource) replays a file the
/// collector exported earlier.
pub trait EventSource {
    /// Fetches the sampled event records for the host, oldest-first or in
    /// any other order — the analyzer assumes nothing about ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the host's log cannot be read.
    fn fetch_events(&self, host: &HostId) -> Result<Vec<EventRecord>, SnapshotError>;

    /// Fetches the log container sizes for the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the host's log metadata cannot be read.
    fn fetch_log_capacity(&self, host: &HostId) -> Result<LogCapacitySample, SnapshotError>;
}
