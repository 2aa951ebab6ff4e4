//! Dense matrix multiply: sequential entry point and the two
//! row-partitioned parallel variants.
//!
//! Both parallel variants share one threading scheme and differ only in
//! the inner kernel each worker runs on its rows. The output is carved
//! into contiguous row bands with `split_at_mut`, so each band is owned
//! by exactly one thread and disjointness is enforced by the borrow
//! checker rather than by locks.

use std::ops::Range;
use std::thread;

use crate::error::{KernelError, Result};
use crate::matrix::blocked_ikj::matmul_blocked_ikj;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::Matrix;
use crate::partition::split_ranges;
use crate::threads::validate_thread_count;

/// A banded inner kernel: computes rows `rows` of C = A * B into its band.
type BandKernel = fn(&[f64], &[f64], &mut [f64], usize, usize, Range<usize>);

/// Single-threaded triple-loop product, the correctness oracle.
///
/// Fails with [`KernelError::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn sequential_matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dims(a, b)?;

    let (m, n, k) = (a.rows(), b.cols(), a.cols());
    let mut c = Matrix::zeros(m, n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, k, 0..m);
    Ok(c)
}

/// Row-partitioned parallel multiply with the naive triple loop per band.
///
/// Fails with [`KernelError::DimensionMismatch`] on incompatible shapes
/// and [`KernelError::InvalidThreadCount`] if `threads` is 0, in both
/// cases before any thread is spawned.
pub fn parallel_matmul_basic(a: &Matrix, b: &Matrix, threads: usize) -> Result<Matrix> {
    parallel_matmul(a, b, threads, matmul_naive_ijk)
}

/// Row-partitioned parallel multiply with the cache-blocked i-k-j kernel
/// per band.
///
/// Same threading discipline and error contract as
/// [`parallel_matmul_basic`]; only the per-thread memory access pattern
/// differs, so the results agree within floating-point tolerance while
/// the wall-clock time does not.
pub fn parallel_matmul_optimized(a: &Matrix, b: &Matrix, threads: usize) -> Result<Matrix> {
    parallel_matmul(a, b, threads, matmul_blocked_ikj)
}

fn parallel_matmul(a: &Matrix, b: &Matrix, threads: usize, kernel: BandKernel) -> Result<Matrix> {
    check_dims(a, b)?;
    validate_thread_count(threads)?;

    let (m, n, k) = (a.rows(), b.cols(), a.cols());
    let mut c = Matrix::zeros(m, n);

    if threads == 1 {
        kernel(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, k, 0..m);
        return Ok(c);
    }

    let a_buf = a.as_slice();
    let b_buf = b.as_slice();
    let ranges = split_ranges(m, threads);

    // Every band write happens inside this scope; the call returns only
    // after all workers have joined.
    thread::scope(|s| {
        let mut rest = c.as_mut_slice();
        for rows in ranges {
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * n);
            rest = tail;
            s.spawn(move || kernel(a_buf, b_buf, band, n, k, rows));
        }
    });

    Ok(c)
}

fn check_dims(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(KernelError::DimensionMismatch {
            a_cols: a.cols(),
            b_rows: b.rows(),
        });
    }
    Ok(())
}
