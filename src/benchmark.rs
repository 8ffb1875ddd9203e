//! Wall-clock comparison of the three strategies.

use crate::error::Result;
use crate::matrix::{Matrix, Scalar, matmul_serial};
use crate::threaded::{matmul_partitioned, matmul_per_row};
use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::debug;

/// One way of computing `A * B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Single-threaded i-j-k loop.
    Serial,
    /// One rayon task per output row.
    Async,
    /// One thread per hardware thread over static row ranges.
    ThreadPool,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Strategy; 3] = [Strategy::Serial, Strategy::Async, Strategy::ThreadPool];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Async => "Async",
            Strategy::ThreadPool => "Thread Pool",
        }
    }

    pub fn multiply<T: Scalar>(self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        match self {
            Strategy::Serial => matmul_serial(a, b),
            Strategy::Async => matmul_per_row(a, b),
            Strategy::ThreadPool => matmul_partitioned(a, b),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elapsed time of a single strategy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub strategy: Strategy,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchReport {
    pub timings: Vec<Timing>,
}

impl BenchReport {
    /// Write the report to `out`, same text as its `Display` form.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

/// One `<name> Multiplication Time: <µs> µs` line per strategy.
impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for timing in &self.timings {
            writeln!(
                f,
                "{} Multiplication Time: {} µs",
                timing.strategy,
                timing.elapsed.as_micros()
            )?;
        }
        Ok(())
    }
}

/// Time each strategy once on the same `a`, `b`.
///
/// Results are dropped after timing; they are not compared. The first
/// dimension mismatch aborts the run.
pub fn run_benchmark<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<BenchReport> {
    let mut timings = Vec::with_capacity(Strategy::ALL.len());

    for strategy in Strategy::ALL {
        let start = Instant::now();
        let c = strategy.multiply(a, b)?;
        let elapsed = start.elapsed();
        black_box(c);

        debug!(%strategy, micros = elapsed.as_micros() as u64, "strategy finished");
        timings.push(Timing { strategy, elapsed });
    }

    Ok(BenchReport { timings })
}

/// Run [`run_benchmark`] and print the report to stdout.
pub fn benchmark<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    let report = run_benchmark(a, b)?;
    print!("{}", report);
    Ok(())
}
