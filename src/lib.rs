//! Dense matrix multiplication three ways, and a benchmark to compare them.
//!
//! I wanted to see how much fan-out granularity matters on a plain triple
//! loop, with no SIMD or blocking to muddy the numbers. Same kernel, three
//! schedules:
//!
//! - **Serial**: one thread, i-j-k order. The reference result.
//! - **Async**: one rayon task per output row. Lots of tiny tasks, left to
//!   the work-stealing pool.
//! - **Thread Pool**: one OS thread per hardware thread, each given a
//!   contiguous block of rows up front.
//!
//! ## Usage
//!
//! ```
//! use matbench::{Matrix, matmul_partitioned, matmul_per_row, matmul_serial};
//!
//! let mut a = Matrix::<f64>::new(64, 32);
//! let mut b = Matrix::<f64>::new(32, 48);
//! a.randomize(0.0, 100.0).unwrap();
//! b.randomize(0.0, 100.0).unwrap();
//!
//! let serial = matmul_serial(&a, &b).unwrap();
//! let tasks = matmul_per_row(&a, &b).unwrap();
//! let pool = matmul_partitioned(&a, &b).unwrap();
//!
//! assert_eq!(serial, tasks);
//! assert_eq!(serial, pool);
//! ```
//!
//! Timing all three on one input pair:
//!
//! ```
//! use matbench::{Matrix, run_benchmark};
//!
//! let a = Matrix::<f64>::identity(16);
//! let report = run_benchmark(&a, &a).unwrap();
//! assert_eq!(report.timings.len(), 3);
//! ```
//!
//! Every multiplier rejects mismatched shapes before doing any work:
//!
//! ```
//! use matbench::{Matrix, MatrixError, matmul_per_row};
//!
//! let a = Matrix::<f64>::new(2, 3);
//! let b = Matrix::<f64>::new(2, 3);
//! assert!(matches!(matmul_per_row(&a, &b), Err(MatrixError::DimensionMismatch { .. })));
//! ```

pub mod benchmark;
pub mod config;
pub mod error;
pub mod matrix;
pub mod threaded;

pub use benchmark::{BenchReport, Strategy, Timing, benchmark, run_benchmark};
pub use config::BenchConfig;
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, Scalar, matmul_serial};
pub use threaded::{matmul_partitioned, matmul_partitioned_with, matmul_per_row};
