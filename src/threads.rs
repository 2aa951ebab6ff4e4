//! Thread-count queries and validation.
//!
//! There is no global thread configuration on purpose: every parallel
//! kernel takes its thread count as an explicit argument so benchmark
//! trials stay independent of each other. This module only answers what
//! the machine offers and rejects counts no kernel can honor.

use crate::error::{KernelError, Result};

/// Number of worker threads the current machine would use by default.
///
/// Falls back to 1 when the query fails (e.g. under exotic sandboxes),
/// which is always a valid thread count.
pub fn get_num_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Reject thread counts no kernel invocation can use.
///
/// Called by every parallel kernel before partitioning work; a count of
/// zero is a caller bug and fails before any thread is spawned.
pub fn validate_thread_count(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(KernelError::InvalidThreadCount { requested: threads });
    }
    Ok(())
}
