//! Event source abstraction for retenza.
//!
//! The estimation core is pure computation over already-fetched data; this
//! crate is where the data comes from:
//!
//! - [`EventSource`] - Trait for fetching events and capacity metadata
//!   from a host's operational log
//! - [`HostId`] - Host identifier, defaulting to the local host
//! - [`SnapshotSource`] / [`Snapshot`] - JSON snapshot implementation
//!
//! Live collector transport and authentication stay behind the
//! [`EventSource`] seam; the shipped implementation reads a snapshot file
//! a collector exported earlier.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retenza/retenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod host;
mod snapshot;
mod source;

pub use host::HostId;
pub use snapshot::{Snapshot, SnapshotSource};
pub use source::{EventSource, SnapshotError};
