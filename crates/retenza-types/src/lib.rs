//! Core types for the retenza event-log retention estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! retenza:
//!
//! - [`EventRecord`] - A single logged event with category and timestamp
//! - [`CategoryId`] - Opaque event category identifier
//! - [`LogCapacitySample`] - Log container sizes at sampling time
//! - [`RetentionPeriod`] - Validated retention window in whole days
//! - [`EstimationInput`] / [`EstimationResult`] - Aggregates passed into
//!   and out of the estimation core

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/retenza/retenza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod capacity;
mod category;
mod error;
mod estimate;
mod event;
mod retention;

pub use capacity::LogCapacitySample;
pub use category::CategoryId;
pub use error::{Result, RetentionError};
pub use estimate::{EstimationInput, EstimationResult};
pub use event::EventRecord;
pub use retention::RetentionPeriod;
