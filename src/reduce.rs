//! Array summation: sequential baseline and parallel reduction.

use std::thread;

use crate::error::Result;
use crate::partition::split_ranges;
use crate::threads::validate_thread_count;

/// Single-pass left-to-right sum.
///
/// This fixed accumulation order is the baseline the parallel reduction
/// is compared against; the two may differ by rounding only.
pub fn sequential_sum(data: &[f64]) -> f64 {
    let mut total = 0.0;
    for &x in data {
        total += x;
    }
    total
}

/// Thread-parallel sum with deterministic combination.
///
/// The array is split into `threads` contiguous near-equal chunks; each
/// worker sums its own chunk left-to-right with no shared state, then the
/// partial sums are added in thread-index order. Fixing both orders bounds
/// the drift against [`sequential_sum`] to plain floating-point rounding -
/// the combination never depends on which thread finishes first.
///
/// Thread counts larger than the array length are fine: the trailing
/// chunks are empty and contribute 0.0.
///
/// Fails with [`KernelError::InvalidThreadCount`](crate::KernelError::InvalidThreadCount)
/// if `threads` is 0.
pub fn parallel_sum(data: &[f64], threads: usize) -> Result<f64> {
    validate_thread_count(threads)?;

    if threads == 1 {
        return Ok(sequential_sum(data));
    }

    let ranges = split_ranges(data.len(), threads);

    let partials: Vec<f64> = thread::scope(|s| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| s.spawn(move || sequential_sum(&data[range])))
            .collect();

        // Joining in spawn order keeps the combination order fixed
        handles
            .into_iter()
            .map(|h| h.join().expect("sum worker panicked"))
            .collect()
    });

    Ok(partials.into_iter().sum())
}
