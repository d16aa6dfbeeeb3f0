//! Report output for the retenza event-log retention estimator.
//!
//! The estimation core produces a pure
//! [`EstimationResult`](retenza_types::EstimationResult); this crate turns
//! it into something a human or a downstream tool reads:
//!
//! - [`ReportSink`] - Trait for writing a result plus its input echo
//! - [`TextReport`] - Aligned human-readable report
//! - [`JsonReport`] - Machine-readable report
//! - [`format_bytes`] / [`format_span`] - Humanization helpers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retenza/retenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod humanize;
mod json;
mod sink;
mod text;

pub use humanize::{format_bytes, format_span};
pub use json::JsonReport;
pub use sink::{ReportError, ReportFormat, ReportMeta, ReportSink};
pub use text::TextReport;
