//! Report sink abstraction.

use std::collections::BTreeSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use retenza_types::{CategoryId, EstimationResult, RetentionError, RetentionPeriod};

/// Report format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Human-readable text report.
    #[default]
    Text,
    /// Machine-readable JSON report.
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Unknown report format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ReportError> for RetentionError {
    fn from(err: ReportError) -> Self {
        Self::Report(err.to_string())
    }
}

/// Echo of the estimation inputs, embedded alongside the result so a
/// report is self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Host the sample was taken from.
    pub host: String,
    /// Requested retention window.
    pub retention: RetentionPeriod,
    /// Categories the filtered projection was scoped to.
    pub categories: BTreeSet<CategoryId>,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl ReportMeta {
    /// Creates report metadata stamped with the current time.
    pub fn new(
        host: impl Into<String>,
        retention: RetentionPeriod,
        categories: BTreeSet<CategoryId>,
    ) -> Self {
        Self {
            host: host.into(),
            retention,
            categories,
            generated_at: Utc::now(),
        }
    }
}

/// Trait for report writers.
pub trait ReportSink {
    /// Writes the estimation result and its input echo to the writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_report<W: Write>(
        &self,
        result: &EstimationResult,
        meta: &ReportMeta,
        writer: W,
    ) -> Result<(), ReportError>;

    /// Returns the file extension for this report format.
    fn extension(&self) -> &str;
}
