//! Estimate command implementation.
//!
//! Fetches the snapshot through the event source seam, runs one
//! estimation, and writes the report to stdout or a file.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use retenza_lib::prelude::*;

/// Run a full estimation over a snapshot and write the report.
pub(crate) fn estimate(
    categories: &[String],
    days: i64,
    input: &Path,
    host: &str,
    output: Option<&Path>,
    format: ReportFormat,
) -> Result<()> {
    let retention = RetentionPeriod::new(days)
        .with_context(|| format!("Invalid retention period: {days} days"))?;
    let categories: BTreeSet<CategoryId> =
        categories.iter().map(|id| CategoryId::from(id.as_str())).collect();

    let host = HostId::new(host);
    let source = SnapshotSource::from_path(input)
        .with_context(|| format!("Cannot load snapshot from {}", input.display()))?;
    let events = source.fetch_events(&host)?;
    let capacity = source.fetch_log_capacity(&host)?;
    info!(events = events.len(), %host, "fetched log sample");

    let estimation = retenza_lib::estimate(&EstimationInput::new(
        events,
        capacity,
        categories.clone(),
        retention,
    ))
    .context("Estimation failed")?;

    let meta = ReportMeta::new(host.as_str(), retention, categories);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_report(&estimation, &meta, format, BufWriter::new(file))?;
            info!(path = %path.display(), "report written");
        }
        None => write_report(&estimation, &meta, format, std::io::stdout().lock())?,
    }

    Ok(())
}

fn write_report<W: Write>(
    result: &EstimationResult,
    meta: &ReportMeta,
    format: ReportFormat,
    writer: W,
) -> Result<()> {
    match format {
        ReportFormat::Text => TextReport.write_report(result, meta, writer)?,
        ReportFormat::Json => JsonReport::pretty().write_report(result, meta, writer)?,
    }
    Ok(())
}
