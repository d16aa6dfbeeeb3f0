//! Retention storage projection for the retenza event-log estimator.
//!
//! This crate turns the derived sample statistics into a multi-day storage
//! projection:
//!
//! - [`estimate_rotations`] - How often the sampled window repeats over
//!   the retention period
//! - [`filter_by_category`] / [`CategoryCounts`] - Exact-match event
//!   counting per requested category
//! - [`estimate_storage`] - The `count x size x rotations` projection
//! - [`estimate`] - One-shot orchestration producing an
//!   [`EstimationResult`](retenza_types::EstimationResult)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retenza/retenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod filter;

pub use estimator::{estimate, estimate_rotations, estimate_storage};
pub use filter::{CategoryCounts, filter_by_category};
