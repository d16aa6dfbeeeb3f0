//! Human-readable text report.

use std::io::Write;

use retenza_types::EstimationResult;

use crate::humanize::{format_bytes, format_span};
use crate::sink::{ReportError, ReportMeta, ReportSink};

/// Writes the estimation result as an aligned, human-readable report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport;

impl ReportSink for TextReport {
    fn write_report<W: Write>(
        &self,
        result: &EstimationResult,
        meta: &ReportMeta,
        mut writer: W,
    ) -> Result<(), ReportError> {
        writeln!(writer, "Log retention storage estimate")?;
        writeln!(writer, "{}", "=".repeat(60))?;
        writeln!(writer, "{:<24} {}", "Host:", meta.host)?;
        writeln!(writer, "{:<24} {}", "Retention period:", meta.retention)?;
        writeln!(
            writer,
            "{:<24} {}",
            "Generated:",
            meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(writer)?;

        writeln!(writer, "Sample")?;
        writeln!(writer, "{}", "-".repeat(60))?;
        writeln!(writer, "{:<24} {}", "Events sampled:", result.total_events)?;
        writeln!(
            writer,
            "{:<24} {} ({:.0} bytes)",
            "Avg event size:",
            format_bytes(result.avg_event_bytes as u64),
            result.avg_event_bytes
        )?;
        writeln!(
            writer,
            "{:<24} {}",
            "Sample span:",
            format_span(result.sample_span)
        )?;
        writeln!(
            writer,
            "{:<24} {:.2}",
            "Estimated rotations:", result.rotations
        )?;
        writeln!(writer)?;

        if !result.category_counts.is_empty() {
            writeln!(writer, "Filtered categories")?;
            writeln!(writer, "{}", "-".repeat(60))?;
            for (category, count) in &result.category_counts {
                writeln!(writer, "{:<24} {}", format!("{category}:"), count)?;
            }
            writeln!(
                writer,
                "{:<24} {}",
                "Filtered total:", result.filtered_events
            )?;
            writeln!(writer)?;
        }

        writeln!(writer, "Projection over {}", meta.retention)?;
        writeln!(writer, "{}", "-".repeat(60))?;
        writeln!(
            writer,
            "{:<24} {}",
            "All events:",
            format_bytes(result.projected_total_bytes)
        )?;
        writeln!(
            writer,
            "{:<24} {}",
            "Filtered events:",
            format_bytes(result.projected_filtered_bytes)
        )?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
