//! Deterministic pseudo-random input generation.
//!
//! Benchmark inputs come from fixed-seed generators so repeated runs time
//! the same data. Bit-identical values across platforms or rand versions
//! are not promised, only repeatability within one build.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{KernelError, Result};
use crate::matrix::Matrix;

const ARRAY_SEED: u64 = 0x5eed_0001;
const MATRIX_A_SEED: u64 = 0x5eed_000a;
const MATRIX_B_SEED: u64 = 0x5eed_000b;

/// Generate `size` uniform values in `[0, 1)`.
///
/// Fails with [`KernelError::InvalidSize`] if `size` is 0.
pub fn create_work_array(size: usize) -> Result<Vec<f64>> {
    if size == 0 {
        return Err(KernelError::InvalidSize { size });
    }

    let mut rng = StdRng::seed_from_u64(ARRAY_SEED);
    Ok((0..size).map(|_| rng.gen_range(0.0..1.0)).collect())
}

/// Generate two independent `size × size` matrices (the A and B operands
/// of a multiply).
///
/// Fails with [`KernelError::InvalidSize`] if `size` is 0.
pub fn create_matrices(size: usize) -> Result<(Matrix, Matrix)> {
    if size == 0 {
        return Err(KernelError::InvalidSize { size });
    }

    let a = random_matrix(size, MATRIX_A_SEED);
    let b = random_matrix(size, MATRIX_B_SEED);
    Ok((a, b))
}

fn random_matrix(size: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..size * size).map(|_| rng.gen_range(0.0..1.0)).collect();
    // Shape is correct by construction
    Matrix::from_vec(data, size, size).expect("size * size buffer")
}
