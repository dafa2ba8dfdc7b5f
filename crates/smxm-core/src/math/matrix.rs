use std::error::Error;
use std::fmt;
use std::mem::size_of;
use std::ops::{Index, IndexMut};

use crate::error::{BenchError, Result};

/// Dense N x N matrix of `f64` stored in one contiguous row-major buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    n: usize,
}

impl Matrix {
    /// Allocate an N x N matrix of zeros, reporting allocation failure
    /// instead of aborting the process.
    pub fn try_zeros(n: usize) -> Result<Self> {
        let len = n
            .checked_mul(n)
            .ok_or(BenchError::AllocationFailure { n, bytes: None })?;
        let bytes = len
            .checked_mul(size_of::<f64>())
            .ok_or(BenchError::AllocationFailure { n, bytes: None })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BenchError::AllocationFailure {
                n,
                bytes: Some(bytes),
            })?;
        data.resize(len, 0.0);
        log::trace!("Allocated {}x{} matrix ({} bytes)", n, n, bytes);

        Ok(Self { data, n })
    }

    /// # Panics
    ///
    /// Panics if N x N overflows `usize`. Use [`Matrix::try_zeros`] for sizes
    /// that come from user input.
    pub fn zeros(n: usize) -> Self {
        let len = match n.checked_mul(n) {
            Some(len) => len,
            None => panic!("matrix dimension {} overflows usize", n),
        };
        Self {
            data: vec![0.0; len],
            n,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn from_shape_vec(n: usize, data: Vec<f64>) -> std::result::Result<Self, ShapeError> {
        if n.checked_mul(n) != Some(data.len()) {
            return Err(ShapeError {
                n,
                len: data.len(),
            });
        }
        Ok(Self { data, n })
    }

    /// Build a matrix from nested rows; every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> std::result::Result<Self, ShapeError> {
        let n = rows.len();
        let mut data = Vec::new();
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(ShapeError {
                    n,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec(n, data)
    }

    /// Side length N.
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Bytes held by the element buffer.
    pub fn size_in_bytes(&self) -> usize {
        self.data.len() * size_of::<f64>()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.n]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.n.max(1)).map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

#[derive(Debug, Clone)]
pub struct ShapeError {
    n: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.n, self.n, self.len
        )
    }
}

impl Error for ShapeError {}
