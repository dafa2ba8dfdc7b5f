use std::error::Error;
use std::fmt;

/// Failure conditions of a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchError {
    /// Missing, non-numeric or non-positive matrix size, or a bad option value.
    InvalidArgument(String),
    /// A matrix buffer of `bytes` bytes for dimension `n` could not be obtained.
    AllocationFailure { n: usize, bytes: Option<usize> },
    /// Kernel operands do not share the same dimension.
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BenchError::InvalidArgument(msg) => write!(f, "{}", msg),
            BenchError::AllocationFailure { n, bytes: Some(bytes) } => write!(
                f,
                "Failed to allocate {} bytes for a {}x{} matrix",
                bytes, n, n
            ),
            BenchError::AllocationFailure { n, bytes: None } => write!(
                f,
                "Matrix size {} is too large to address a {}x{} buffer",
                n, n, n
            ),
            BenchError::DimensionMismatch { expected, found } => write!(
                f,
                "Matrix dimension mismatch: expected {}x{}, found {}x{}",
                expected, expected, found, found
            ),
        }
    }
}

impl Error for BenchError {}

pub type Result<T> = std::result::Result<T, BenchError>;
