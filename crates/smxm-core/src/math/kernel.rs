use rand::Rng;

use crate::error::{BenchError, Result};
use crate::math::Matrix;

/// Upper bound (exclusive) of the integer values written by [`initialize`].
pub const FILL_RANGE: u32 = 100;

/// Fill every entry of `matrix` with a pseudo-random integer in `[0, 99]`.
///
/// Entries are drawn in row-major order, so two matrices filled from
/// generators with the same seed are identical.
pub fn initialize<R: Rng + ?Sized>(matrix: &mut Matrix, rng: &mut R) {
    for value in matrix.as_mut_slice().iter_mut() {
        *value = rng.gen_range(0..FILL_RANGE) as f64;
    }
}

/// Compute `c = a * b` with the textbook triple loop.
///
/// The loop nest is `i` (row of `a`) outer, `j` (column of `b`) middle and
/// `k` innermost, so `b` is walked column-wise with stride N. Each `c[i][j]`
/// is accumulated from `0.0` in increasing `k` and stored exactly once; the
/// result is therefore bit-for-bit reproducible for a given `a` and `b`.
///
/// # Errors
///
/// Returns [`BenchError::DimensionMismatch`] before touching `c` if the three
/// matrices are not all N x N.
pub fn multiply(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
    let n = a.dim();
    for other in [b.dim(), c.dim()] {
        if other != n {
            return Err(BenchError::DimensionMismatch {
                expected: n,
                found: other,
            });
        }
    }

    let b_data = b.as_slice();
    let c_data = c.as_mut_slice();
    for i in 0..n {
        let a_row = a.row_slice(i);
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a_row[k] * b_data[k * n + j];
            }
            c_data[i * n + j] = sum;
        }
    }
    Ok(())
}
