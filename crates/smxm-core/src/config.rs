use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{BenchError, Result};

/// How reports are written to standard output.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The four `<label>: <value> <unit>` lines scraped by the power-meter driver.
    #[default]
    Text,
    /// One JSON object per run.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Expected one of: text, json",
                s
            )),
        }
    }
}

/// Parameters of a benchmark invocation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Side length N of the three square matrices.
    pub matrix_size: usize,
    /// Seed of the fill generator. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
    /// Number of times the whole pipeline is run.
    pub repetitions: usize,
    pub output: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            matrix_size: 0,
            seed: None,
            repetitions: 1,
            output: OutputFormat::Text,
        }
    }
}

impl BenchConfig {
    pub fn new(matrix_size: usize) -> Self {
        Self {
            matrix_size,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.matrix_size == 0 {
            return Err(BenchError::InvalidArgument(
                "Matrix size must be a positive integer.".to_string(),
            ));
        }
        if self.repetitions == 0 {
            return Err(BenchError::InvalidArgument(
                "Repetition count must be a positive integer.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse the `<matrix-size>` argument as a base-10 positive integer.
pub fn parse_matrix_size(arg: &str) -> Result<usize> {
    let value: i128 = arg.trim().parse().map_err(|_| {
        BenchError::InvalidArgument(format!(
            "Matrix size must be a positive integer, got '{}'.",
            arg
        ))
    })?;
    if value <= 0 {
        return Err(BenchError::InvalidArgument(
            "Matrix size must be a positive integer.".to_string(),
        ));
    }
    usize::try_from(value).map_err(|_| {
        BenchError::InvalidArgument(format!("Matrix size {} is too large.", value))
    })
}
