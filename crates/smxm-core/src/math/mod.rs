//! Square matrix type and the multiplication workload kernels.
//!
//! `Matrix` keeps its elements in a single contiguous row-major buffer so a
//! whole matrix is one allocation and one release. The kernels in `kernel`
//! are deliberately naive: the benchmark measures the textbook triple loop.
pub mod kernel;
pub mod matrix;

pub use kernel::{initialize, multiply};
pub use matrix::{Matrix, ShapeError};
