//! Benchmark runner: sum and matmul across sizes and thread counts.

use parbench::{
    benchmark_matmul, benchmark_sum, create_matrices, create_work_array, get_num_threads, Result,
};

const THREAD_COUNTS: [usize; 4] = [1, 2, 4, 8];
const ARRAY_SIZES: [usize; 3] = [1_000_000, 4_000_000, 16_000_000];
const MATRIX_SIZES: [usize; 3] = [128, 256, 512];

fn main() -> Result<()> {
    println!("=== Parallel Kernel Benchmark ===\n");
    println!("Available threads: {}\n", get_num_threads());

    run_sum_benchmarks()?;
    run_matmul_benchmarks()?;

    Ok(())
}

fn run_sum_benchmarks() -> Result<()> {
    println!("Array sum");
    println!("{}", "=".repeat(60));

    for &size in &ARRAY_SIZES {
        println!("\nArray size: {}", group_digits(size));
        println!("{}", "-".repeat(60));

        let arr = create_work_array(size)?;

        for &threads in &THREAD_COUNTS {
            let run = benchmark_sum(&arr, threads)?;

            println!(
                "{:2} threads  seq {:9.6}s  par {:9.6}s  speedup {:5.2}x",
                threads,
                run.seq_time,
                run.par_time,
                run.speedup()
            );

            if run.agrees() {
                println!("            accuracy: OK");
            } else {
                println!(
                    "            WARNING: results diverge by {:e}",
                    run.divergence()
                );
            }
        }
    }
    println!();
    Ok(())
}

fn run_matmul_benchmarks() -> Result<()> {
    println!("Matrix multiplication");
    println!("{}", "=".repeat(60));

    for &size in &MATRIX_SIZES {
        println!("\nMatrix size: {}x{}", size, size);
        println!("{}", "-".repeat(60));

        let (a, b) = create_matrices(size)?;

        for &threads in &THREAD_COUNTS {
            let run = benchmark_matmul(&a, &b, threads)?;

            println!(
                "{:2} threads  seq {:9.6}s  basic {:9.6}s ({:5.2}x)  opt {:9.6}s ({:5.2}x)",
                threads,
                run.seq_time,
                run.basic_time,
                run.basic_speedup(),
                run.optimized_time,
                run.optimized_speedup()
            );
        }
    }
    println!();
    Ok(())
}

/// 1234567 -> "1,234,567"
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
