//! JSON snapshot reading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use retenza_types::{EventRecord, LogCapacitySample};

use crate::{EventSource, HostId, SnapshotError};

/// One exported sample of a host's operational log.
///
/// ```json
/// {
///   "host": "web-01",
///   "capacity": { "max_configured_bytes": 15728640, "current_bytes": null },
///   "events": [ { "category": "4624", "created": "2025-03-01T12:30:00Z" } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Host the snapshot was exported from.
    pub host: HostId,
    /// Log container sizes at export time.
    pub capacity: LogCapacitySample,
    /// Sampled event records.
    pub events: Vec<EventRecord>,
}

impl Snapshot {
    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// An [`EventSource`] replaying a snapshot file exported from a live
/// collector.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Loads a snapshot file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// snapshot.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path.as_ref())?;
        let snapshot = Snapshot::from_json(&json)?;
        debug!(
            host = %snapshot.host,
            events = snapshot.events.len(),
            "loaded snapshot"
        );
        Ok(Self { snapshot })
    }

    /// Wraps an already-parsed snapshot.
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Returns the snapshot backing this source.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn check_host(&self, host: &HostId) -> Result<(), SnapshotError> {
        if self.snapshot.host == *host {
            Ok(())
        } else {
            Err(SnapshotError::HostMismatch {
                requested: host.clone(),
                found: self.snapshot.host.clone(),
            })
        }
    }
}

impl EventSource for SnapshotSource {
    fn fetch_events(&self, host: &HostId) -> Result<Vec<EventRecord>, SnapshotError> {
        self.check_host(host)?;
        Ok(self.snapshot.events.clone())
    }

    fn fetch_log_capacity(&self, host: &HostId) -> Result<LogCapacitySample, SnapshotError> {
        self.check_host(host)?;
        Ok(self.snapshot.capacity)
    }
}
