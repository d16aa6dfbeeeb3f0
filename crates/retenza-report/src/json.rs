//! JSON report output.

use std::io::Write;

use serde::Serialize;

use retenza_types::EstimationResult;

use crate::sink::{ReportError, ReportMeta, ReportSink};

/// Writes the estimation result as a single JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport {
    /// Pretty-print the output.
    pub pretty: bool,
}

impl JsonReport {
    /// Creates a pretty-printing JSON report writer.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Wire shape of the JSON report.
#[derive(Serialize)]
struct ReportDocument<'a> {
    meta: &'a ReportMeta,
    result: &'a EstimationResult,
}

impl ReportSink for JsonReport {
    fn write_report<W: Write>(
        &self,
        result: &EstimationResult,
        meta: &ReportMeta,
        mut writer: W,
    ) -> Result<(), ReportError> {
        let document = ReportDocument { meta, result };
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &document)?;
        } else {
            serde_json::to_writer(&mut writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
