//! Range splitting for work partitioning across threads.
//!
//! Both parallel kernels (sum and matmul) assign work by index arithmetic:
//! contiguous, disjoint ranges that cover the input exactly once. Keeping
//! the arithmetic in one place means neither kernel can get the remainder
//! handling subtly wrong on its own.

use std::ops::Range;

/// Split `0..len` into `parts` contiguous ranges of near-equal length.
///
/// The first `len % parts` ranges get one extra element, so no range is
/// ever more than one element longer than another. When `parts > len`,
/// the trailing ranges are empty - callers get a no-op chunk, never a
/// negative or overlapping one.
///
/// # Panics
///
/// Panics if `parts` is 0. Callers validate thread counts before
/// partitioning, so a zero here is a bug in the kernel, not bad user input.
pub fn split_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    assert!(parts > 0, "cannot split into 0 parts");

    let base = len / parts;
    let extra = len % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let size = if i < extra { base + 1 } else { base };
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}
