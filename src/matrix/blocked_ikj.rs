//! Cache-aware multiply: i-k-j loop order with K-dimension blocking.

use std::ops::Range;

/// How much of the K dimension to process per pass. 256 f64 values of a
/// B row plus the matching C row stay resident in L1/L2 across the inner
/// loop.
const KC: usize = 256;

/// Cache-blocked matrix multiplication using i-k-j loop order.
///
/// Two changes over [`naive_ijk`](super::naive_ijk::matmul_naive_ijk),
/// both about memory locality rather than arithmetic:
///
/// - Swapping the j and k loops makes the innermost loop walk a row of B
///   and a row of C with stride 1, so every cache line loaded is fully
///   used before eviction.
/// - The k loop is processed in chunks of [`KC`], so the slice of B rows
///   touched by one chunk is reused across all of this band's A rows
///   while it is still hot.
///
/// Results are identical to the naive kernel up to floating-point
/// rounding; only the access pattern differs.
///
/// Same banded contract as the naive kernel: writes rows `rows` of
/// C = A * B into `c_band`.
pub fn matmul_blocked_ikj(
    a: &[f64],
    b: &[f64],
    c_band: &mut [f64],
    n: usize,
    k: usize,
    rows: Range<usize>,
) {
    debug_assert_eq!(c_band.len(), rows.len() * n);

    // c_band starts zeroed; each kk pass accumulates into it.
    for kk in (0..k).step_by(KC) {
        let k_end = (kk + KC).min(k);

        for (band_i, i) in rows.clone().enumerate() {
            let c_row = &mut c_band[band_i * n..(band_i + 1) * n];

            for p in kk..k_end {
                let a_ip = a[i * k + p];
                let b_row = &b[p * n..(p + 1) * n];

                for j in 0..n {
                    c_row[j] += a_ip * b_row[j];
                }
            }
        }
    }
}
