//! Parallel numeric kernels benchmarked against sequential baselines.
//!
//! I built this to see how far plain OS threads get you on two classic
//! shared-memory workloads: array reduction (sum) and dense matrix
//! multiplication. Each parallel kernel is checked against a sequential
//! reference and timed across thread counts, and the matmul additionally
//! gets a cache-aware variant to show that memory layout matters as much
//! as the thread count.
//!
//! ## Usage
//!
//! ```
//! use parbench::{benchmark_sum, create_work_array};
//!
//! let arr = create_work_array(1_000_000)?;
//! let run = benchmark_sum(&arr, 4)?;
//!
//! assert!(run.agrees());
//! println!("speedup: {:.2}x", run.speedup());
//! # Ok::<(), parbench::KernelError>(())
//! ```
//!
//! Matrix trials work the same way:
//!
//! ```
//! use parbench::{benchmark_matmul, create_matrices};
//!
//! let (a, b) = create_matrices(64)?;
//! let run = benchmark_matmul(&a, &b, 4)?;
//!
//! println!("basic: {:.2}x  optimized: {:.2}x",
//!     run.basic_speedup(), run.optimized_speedup());
//! # Ok::<(), parbench::KernelError>(())
//! ```
//!
//! ## What's inside
//!
//! - Seeded input generation, so repeated runs time the same data
//! - Parallel sum with partial sums combined in thread-index order
//! - Row-partitioned parallel matmul, naive and cache-blocked (i-k-j)
//! - Disjoint output bands by construction - no locks anywhere
//! - Thread count is always an explicit per-call argument
//!
//! Parallel and sequential results agree within floating-point rounding;
//! the harness flags anything past 1e-10 absolute rather than hiding it.

pub mod bench;
pub mod error;
pub mod generate;
pub mod matmul;
pub mod matrix;
pub mod partition;
pub mod reduce;
pub mod threads;

pub use bench::{benchmark_matmul, benchmark_sum, MatmulBenchmark, SumBenchmark, SUM_TOLERANCE};
pub use error::{KernelError, Result};
pub use generate::{create_matrices, create_work_array};
pub use matmul::{parallel_matmul_basic, parallel_matmul_optimized, sequential_matmul};
pub use matrix::Matrix;
pub use reduce::{parallel_sum, sequential_sum};
pub use threads::get_num_threads;
