//! Error taxonomy for the kernel APIs.
//!
//! Every variant is a caller bug surfaced before any work is dispatched:
//! kernels never fail partway through, and numerical drift between the
//! sequential and parallel paths is a harness-level comparison, not an error.

use thiserror::Error;

/// Errors raised by input validation in generators and kernels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// A zero-sized array or matrix was requested.
    #[error("invalid size: expected a positive size, got {size}")]
    InvalidSize { size: usize },

    /// A parallel kernel was asked to run with zero worker threads.
    #[error("invalid thread count: expected at least 1 thread, got {requested}")]
    InvalidThreadCount { requested: usize },

    /// Matrix shapes are incompatible for multiplication (A.cols must equal B.rows).
    #[error("dimension mismatch: A has {a_cols} columns but B has {b_rows} rows")]
    DimensionMismatch { a_cols: usize, b_rows: usize },
}

pub type Result<T> = std::result::Result<T, KernelError>;
