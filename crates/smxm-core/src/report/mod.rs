//! Report types emitted at the end of a successful run.
//!
//! The text rendering is a fixed contract: an external driver scrapes the
//! four lines to correlate them with power-meter samples.
pub mod report;

pub use report::BenchReport;
