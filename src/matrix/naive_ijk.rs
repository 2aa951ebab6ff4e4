//! Textbook triple-loop multiply, the correctness oracle.

use std::ops::Range;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the reference every other kernel is validated against. It is
/// slow on purpose: the innermost loop walks B column-wise with stride
/// `n`, missing cache on nearly every access.
///
/// Computes rows `rows` of C = A * B, writing into `c_band`, whose first
/// row corresponds to global row `rows.start`. Passing `0..m` with a full
/// output buffer gives the plain sequential multiply; the threaded kernels
/// pass disjoint bands instead.
///
/// # Arguments
///
/// * `a` - Full matrix A (m × k), row-major
/// * `b` - Full matrix B (k × n), row-major
/// * `c_band` - Output rows `rows` of C (len `rows.len() * n`), row-major
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
/// * `rows` - Global row range of C this call computes
pub fn matmul_naive_ijk(
    a: &[f64],
    b: &[f64],
    c_band: &mut [f64],
    n: usize,
    k: usize,
    rows: Range<usize>,
) {
    debug_assert_eq!(c_band.len(), rows.len() * n);

    for (band_i, i) in rows.enumerate() {
        for j in 0..n {
            let mut acc = 0.0;
            for p in 0..k {
                acc += a[i * k + p] * b[p * n + j];
            }
            c_band[band_i * n + j] = acc;
        }
    }
}
