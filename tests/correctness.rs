use parbench::{
    create_matrices, create_work_array, parallel_matmul_basic, parallel_matmul_optimized,
    parallel_sum, sequential_matmul, sequential_sum, KernelError, Matrix, SUM_TOLERANCE,
};

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.rows(), actual.rows(), "{}: row count mismatch", name);
    assert_eq!(expected.cols(), actual.cols(), "{}: col count mismatch", name);

    let e = expected.as_slice();
    let a = actual.as_slice();
    for i in 0..e.len() {
        assert!(
            (e[i] - a[i]).abs() < 1e-9,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            e[i],
            a[i]
        );
    }
}

/// Deterministic non-random fill, so expected values are easy to reason about.
fn patterned_matrix(rows: usize, cols: usize, modulus: usize) -> Matrix {
    let data: Vec<f64> = (0..rows * cols).map(|i| (i % modulus) as f64).collect();
    Matrix::from_vec(data, rows, cols).unwrap()
}

// ============================================================
// Parallel sum vs sequential baseline
// ============================================================

#[test]
fn test_sum_agreement_across_sizes_and_threads() {
    for size in [1, 2, 63, 64, 1000, 100_000] {
        let arr = create_work_array(size).unwrap();
        let expected = sequential_sum(&arr);

        for threads in [1, 2, 3, 4, 8] {
            let actual = parallel_sum(&arr, threads).unwrap();
            assert!(
                (expected - actual).abs() <= SUM_TOLERANCE,
                "size {} threads {}: {} vs {}",
                size,
                threads,
                expected,
                actual
            );
        }
    }
}

#[test]
fn test_sum_large_array_four_threads() {
    let arr = create_work_array(1_000_000).unwrap();

    let expected = sequential_sum(&arr);
    let actual = parallel_sum(&arr, 4).unwrap();

    assert!((expected - actual).abs() <= SUM_TOLERANCE);
}

#[test]
fn test_sum_single_thread_matches_sequential() {
    let arr = create_work_array(10_000).unwrap();
    assert_eq!(parallel_sum(&arr, 1).unwrap(), sequential_sum(&arr));
}

#[test]
fn test_sum_more_threads_than_elements() {
    let arr = create_work_array(3).unwrap();
    let expected = sequential_sum(&arr);

    for threads in [4, 8, 100] {
        let actual = parallel_sum(&arr, threads).unwrap();
        assert!((expected - actual).abs() <= SUM_TOLERANCE);
    }
}

#[test]
fn test_sum_repeated_runs_identical_per_thread_count() {
    let arr = create_work_array(50_000).unwrap();

    for threads in [2, 4, 8] {
        let first = parallel_sum(&arr, threads).unwrap();
        for _ in 0..5 {
            assert_eq!(parallel_sum(&arr, threads).unwrap(), first);
        }
    }
}

// ============================================================
// Parallel matmul vs sequential baseline
// ============================================================

#[test]
fn test_matmul_agreement_across_sizes_and_threads() {
    for size in [1, 2, 3, 7, 16, 33, 64] {
        let (a, b) = create_matrices(size).unwrap();
        let expected = sequential_matmul(&a, &b).unwrap();

        for threads in [1, 2, 4, 8] {
            let basic = parallel_matmul_basic(&a, &b, threads).unwrap();
            let optimized = parallel_matmul_optimized(&a, &b, threads).unwrap();

            assert_matrices_equal(&expected, &basic, &format!("basic_{}_{}", size, threads));
            assert_matrices_equal(
                &expected,
                &optimized,
                &format!("optimized_{}_{}", size, threads),
            );
        }
    }
}

#[test]
fn test_matmul_200x200_four_threads() {
    let (a, b) = create_matrices(200).unwrap();

    let expected = sequential_matmul(&a, &b).unwrap();
    let basic = parallel_matmul_basic(&a, &b, 4).unwrap();
    let optimized = parallel_matmul_optimized(&a, &b, 4).unwrap();

    assert_matrices_equal(&expected, &basic, "200x200_basic");
    assert_matrices_equal(&expected, &optimized, "200x200_optimized");
}

#[test]
fn test_matmul_non_square() {
    let test_cases = [
        (32, 64, 48),  // wide result
        (64, 32, 48),  // tall result
        (13, 17, 19),  // primes
        (100, 50, 75), // odd sizes
    ];

    for (m, n, k) in test_cases {
        let a = patterned_matrix(m, k, 10);
        let b = patterned_matrix(k, n, 13);

        let expected = sequential_matmul(&a, &b).unwrap();
        let basic = parallel_matmul_basic(&a, &b, 4).unwrap();
        let optimized = parallel_matmul_optimized(&a, &b, 4).unwrap();

        let name = format!("{}x{}x{}", m, n, k);
        assert_matrices_equal(&expected, &basic, &format!("basic_{}", name));
        assert_matrices_equal(&expected, &optimized, &format!("optimized_{}", name));
    }
}

#[test]
fn test_matmul_k_blocking_boundaries() {
    // The optimized kernel chunks K in blocks of 256; exercise sizes
    // straddling that boundary
    for k in [255, 256, 257, 511, 512, 513] {
        let a = patterned_matrix(8, k, 7);
        let b = patterned_matrix(k, 8, 11);

        let expected = sequential_matmul(&a, &b).unwrap();
        let optimized = parallel_matmul_optimized(&a, &b, 2).unwrap();

        assert_matrices_equal(&expected, &optimized, &format!("k_boundary_{}", k));
    }
}

#[test]
fn test_matmul_more_threads_than_rows() {
    let (a, b) = create_matrices(3).unwrap();
    let expected = sequential_matmul(&a, &b).unwrap();

    for threads in [4, 8, 16] {
        let basic = parallel_matmul_basic(&a, &b, threads).unwrap();
        let optimized = parallel_matmul_optimized(&a, &b, threads).unwrap();

        assert_matrices_equal(&expected, &basic, &format!("basic_threads_{}", threads));
        assert_matrices_equal(&expected, &optimized, &format!("opt_threads_{}", threads));
    }
}

#[test]
fn test_matmul_every_row_is_computed() {
    // With strictly positive random inputs, every cell of the true product
    // is strictly positive. A zero anywhere would mean a row band was
    // skipped or double-assigned to an empty range.
    let (a, b) = create_matrices(40).unwrap();

    for threads in [2, 4, 7] {
        let c = parallel_matmul_basic(&a, &b, threads).unwrap();
        for i in 0..c.rows() {
            for j in 0..c.cols() {
                assert!(
                    c.get(i, j) > 0.0,
                    "threads {}: cell ({}, {}) was never written",
                    threads,
                    i,
                    j
                );
            }
        }
    }
}

// ============================================================
// Error paths
// ============================================================

#[test]
fn test_zero_size_generation_fails() {
    assert_eq!(
        create_work_array(0).unwrap_err(),
        KernelError::InvalidSize { size: 0 }
    );
    assert_eq!(
        create_matrices(0).unwrap_err(),
        KernelError::InvalidSize { size: 0 }
    );
}

#[test]
fn test_zero_thread_count_fails() {
    let arr = create_work_array(10).unwrap();
    assert_eq!(
        parallel_sum(&arr, 0).unwrap_err(),
        KernelError::InvalidThreadCount { requested: 0 }
    );

    let (a, b) = create_matrices(4).unwrap();
    assert_eq!(
        parallel_matmul_basic(&a, &b, 0).unwrap_err(),
        KernelError::InvalidThreadCount { requested: 0 }
    );
    assert_eq!(
        parallel_matmul_optimized(&a, &b, 0).unwrap_err(),
        KernelError::InvalidThreadCount { requested: 0 }
    );
}

#[test]
fn test_dimension_mismatch_fails() {
    let a = patterned_matrix(4, 5, 10);
    let b = patterned_matrix(6, 4, 10);

    let expected = KernelError::DimensionMismatch { a_cols: 5, b_rows: 6 };
    assert_eq!(sequential_matmul(&a, &b).unwrap_err(), expected);
    assert_eq!(parallel_matmul_basic(&a, &b, 4).unwrap_err(), expected);
    assert_eq!(parallel_matmul_optimized(&a, &b, 4).unwrap_err(), expected);
}

// ============================================================
// Input immutability
// ============================================================

#[test]
fn test_inputs_unchanged_after_kernel_runs() {
    let arr = create_work_array(10_000).unwrap();
    let arr_before = arr.clone();

    let (a, b) = create_matrices(32).unwrap();
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = parallel_sum(&arr, 4).unwrap();
    let _ = parallel_matmul_basic(&a, &b, 4).unwrap();
    let _ = parallel_matmul_optimized(&a, &b, 4).unwrap();

    assert_eq!(arr, arr_before);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
