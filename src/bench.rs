//! Timed benchmark entry points and their result records.
//!
//! The harness times each kernel on the same input and hands back plain
//! records; deciding what to print (or whether a divergence is alarming)
//! is the caller's job. A drift beyond [`SUM_TOLERANCE`] is reported by
//! [`SumBenchmark::agrees`], never raised as an error - the kernels only
//! fail on malformed input.

use std::time::Instant;

use crate::error::Result;
use crate::matmul::{parallel_matmul_basic, parallel_matmul_optimized, sequential_matmul};
use crate::matrix::Matrix;
use crate::reduce::{parallel_sum, sequential_sum};

/// Absolute tolerance for sequential/parallel sum agreement.
///
/// The parallel reduction reassociates additions, so bit-equality is not
/// expected; anything beyond this bound means a kernel bug, not rounding.
pub const SUM_TOLERANCE: f64 = 1e-10;

/// One sum trial: both timings (seconds) and both results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumBenchmark {
    pub seq_time: f64,
    pub par_time: f64,
    pub seq_sum: f64,
    pub par_sum: f64,
}

impl SumBenchmark {
    /// Sequential time over parallel time; 0.0 when the parallel run was
    /// too fast to measure.
    pub fn speedup(&self) -> f64 {
        if self.par_time > 0.0 {
            self.seq_time / self.par_time
        } else {
            0.0
        }
    }

    /// Absolute difference between the two results.
    pub fn divergence(&self) -> f64 {
        (self.seq_sum - self.par_sum).abs()
    }

    /// Whether the parallel result is within [`SUM_TOLERANCE`] of the
    /// sequential baseline.
    pub fn agrees(&self) -> bool {
        self.divergence() <= SUM_TOLERANCE
    }
}

/// One matmul trial: timings (seconds) for all three variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatmulBenchmark {
    pub seq_time: f64,
    pub basic_time: f64,
    pub optimized_time: f64,
}

impl MatmulBenchmark {
    pub fn basic_speedup(&self) -> f64 {
        if self.basic_time > 0.0 {
            self.seq_time / self.basic_time
        } else {
            0.0
        }
    }

    pub fn optimized_speedup(&self) -> f64 {
        if self.optimized_time > 0.0 {
            self.seq_time / self.optimized_time
        } else {
            0.0
        }
    }
}

/// Time [`sequential_sum`] and [`parallel_sum`] on the same input.
pub fn benchmark_sum(data: &[f64], threads: usize) -> Result<SumBenchmark> {
    // Fail before the sequential run, not between the two timings
    crate::threads::validate_thread_count(threads)?;

    let start = Instant::now();
    let seq_sum = sequential_sum(data);
    let seq_time = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let par_sum = parallel_sum(data, threads)?;
    let par_time = start.elapsed().as_secs_f64();

    Ok(SumBenchmark {
        seq_time,
        par_time,
        seq_sum,
        par_sum,
    })
}

/// Time all three matmul variants on the same operands.
///
/// Results are computed and dropped; correctness of the variants against
/// each other is the test suite's concern, timing is this function's.
pub fn benchmark_matmul(a: &Matrix, b: &Matrix, threads: usize) -> Result<MatmulBenchmark> {
    crate::threads::validate_thread_count(threads)?;

    let start = Instant::now();
    let _ = sequential_matmul(a, b)?;
    let seq_time = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let _ = parallel_matmul_basic(a, b, threads)?;
    let basic_time = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let _ = parallel_matmul_optimized(a, b, threads)?;
    let optimized_time = start.elapsed().as_secs_f64();

    Ok(MatmulBenchmark {
        seq_time,
        basic_time,
        optimized_time,
    })
}
