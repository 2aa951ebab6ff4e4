//! Row-major matrix storage and the sequential multiply kernels.
//!
//! Matrices are flat `Vec<f64>` buffers with explicit dimensions; every
//! kernel indexes `data[i * cols + j]` directly. The inner kernels live in
//! submodules and operate on raw slices with an explicit row band, so the
//! threaded layer can reuse them on disjoint slices of the output.

pub mod blocked_ikj;
pub mod naive_ijk;

use crate::error::{KernelError, Result};

/// A dense row-major matrix of `f64` values.
///
/// Once generated, a matrix is never mutated: kernels take `&Matrix`
/// operands and allocate fresh output buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from an existing row-major buffer.
    ///
    /// Fails with [`KernelError::InvalidSize`] if the buffer length does
    /// not equal `rows * cols`, or if either dimension is zero.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(KernelError::InvalidSize { size: rows.min(cols) });
        }
        if data.len() != rows * cols {
            return Err(KernelError::InvalidSize { size: data.len() });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Element at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds", i, j);
        self.data[i * self.cols + j]
    }
}
