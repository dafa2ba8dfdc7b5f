use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::MemoryReport;
use crate::stats::RunSummary;
use crate::timing::TimingReport;

/// Outcome of one complete Validate -> Allocate -> Initialize -> Multiply run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    pub matrix_size: usize,
    pub seed: u64,
    pub timing: TimingReport,
    pub memory: MemoryReport,
    /// Wall-clock bounds of the run, for aligning with external power logs.
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BenchReport {
    /// Write the four scrapeable report lines.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total time: {:.6} seconds", self.timing.total)?;
        writeln!(
            out,
            "Initialization time: {:.6} seconds",
            self.timing.initialization
        )?;
        writeln!(out, "Computation time: {:.6} seconds", self.timing.computation)?;
        writeln!(out, "Memory usage: {} kilobytes", self.memory.kilobytes())?;
        Ok(())
    }

    /// Write the report as a single line of JSON.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }
}

impl RunSummary {
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Runs: {}", self.runs)?;
        for (label, stats) in [
            ("Total time", &self.total),
            ("Initialization time", &self.initialization),
            ("Computation time", &self.computation),
        ] {
            writeln!(out, "{} mean: {:.6} seconds", label, stats.mean)?;
            writeln!(out, "{} stddev: {:.6} seconds", label, stats.std_dev)?;
            writeln!(out, "{} min: {:.6} seconds", label, stats.min)?;
            writeln!(out, "{} max: {:.6} seconds", label, stats.max)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }
}
