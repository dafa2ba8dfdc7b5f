use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::report::BenchReport;

/// Descriptive statistics of one timing phase across repeated runs, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub mean: f64,
    /// Sample standard deviation; `0.0` for a single run.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl PhaseStats {
    /// Returns `None` for an empty sample.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let std_dev = Statistics::std_dev(samples);
        Some(Self {
            mean: Statistics::mean(samples),
            std_dev: if std_dev.is_nan() { 0.0 } else { std_dev },
            min: Statistics::min(samples),
            max: Statistics::max(samples),
        })
    }
}

/// Timing summary over a series of runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub runs: usize,
    pub total: PhaseStats,
    pub initialization: PhaseStats,
    pub computation: PhaseStats,
}

impl RunSummary {
    pub fn from_reports(reports: &[BenchReport]) -> Option<Self> {
        let collect = |f: fn(&BenchReport) -> f64| reports.iter().map(f).collect::<Vec<f64>>();

        Some(Self {
            runs: reports.len(),
            total: PhaseStats::from_samples(&collect(|r| r.timing.total))?,
            initialization: PhaseStats::from_samples(&collect(|r| r.timing.initialization))?,
            computation: PhaseStats::from_samples(&collect(|r| r.timing.computation))?,
        })
    }
}
