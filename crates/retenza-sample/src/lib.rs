//! Sample analysis for the retenza event-log retention estimator.
//!
//! This crate reduces a raw event sample and its capacity metadata into
//! the derived quantities the retention estimator works from:
//!
//! - [`effective_log_size`] - Payload bytes behind the container overhead
//! - [`average_event_size`] - Bytes per event in the sample
//! - [`time_span`] - Elapsed time between oldest and newest event

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retenza/retenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyzer;

pub use analyzer::{average_event_size, effective_log_size, time_span};
