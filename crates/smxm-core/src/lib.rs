//! smxm-core: the serial matrix-multiplication workload of an energy
//! measurement harness.
//!
//! This crate allocates two N x N matrices, fills them from a seedable
//! generator, multiplies them with the textbook i-j-k triple loop and reports
//! the initialization and computation times together with the peak resident
//! memory of the process. Power sampling and energy computation happen
//! outside the process; the only contract with that tooling is the report
//! written on standard output.
pub mod benchmark;
pub mod config;
pub mod error;
pub mod math;
pub mod memory;
pub mod report;
pub mod stats;
pub mod timing;

pub use benchmark::{run, MatrixBenchmark};
pub use config::{parse_matrix_size, BenchConfig, OutputFormat};
pub use error::BenchError;
pub use report::BenchReport;
pub use stats::RunSummary;
