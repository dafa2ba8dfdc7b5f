use anyhow::{Context, Result};
use std::io::Write;

use smxm_core::{BenchReport, OutputFormat, RunSummary};

/// Write every report, followed by a summary when more than one run was made.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[BenchReport],
    format: OutputFormat,
) -> Result<()> {
    for report in reports {
        let written = match format {
            OutputFormat::Text => report.write_text(out),
            OutputFormat::Json => report.write_json(out),
        };
        written.context("Failed to write benchmark report")?;
    }

    if reports.len() > 1 {
        if let Some(summary) = RunSummary::from_reports(reports) {
            let written = match format {
                OutputFormat::Text => summary.write_text(out),
                OutputFormat::Json => summary.write_json(out),
            };
            written.context("Failed to write run summary")?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
