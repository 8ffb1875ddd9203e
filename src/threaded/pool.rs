//! Fixed-size thread pool over statically partitioned rows.

use super::partition::{RowRange, available_parallelism, partition_rows};
use crate::error::Result;
use crate::matrix::naive_ijk::{check_contraction, row_ijk};
use crate::matrix::{Matrix, Scalar};
use std::num::NonZeroUsize;
use std::{mem, panic, thread};
use tracing::{debug, instrument};

/// Multiply with one OS thread per hardware thread.
///
/// Shorthand for [`matmul_partitioned_with`] using
/// [`available_parallelism`](super::partition::available_parallelism).
pub fn matmul_partitioned<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    matmul_partitioned_with(a, b, available_parallelism())
}

/// Multiply with exactly `workers` threads, each owning a contiguous block
/// of output rows.
///
/// Rows are split by [`partition_rows`]. The output buffer is carved into
/// one `&mut` block per range with `split_at_mut`, so a worker can only
/// write the rows it was given. Workers whose range is empty return at
/// once. The call blocks until every worker has been joined; a panic in a
/// worker is re-raised on the caller.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`](crate::MatrixError::DimensionMismatch)
/// if `a.cols() != b.rows()`, before any thread is started.
#[instrument(
    level = "debug",
    skip_all,
    fields(m = a.rows(), k = a.cols(), n = b.cols(), workers = workers.get())
)]
pub fn matmul_partitioned_with<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    workers: NonZeroUsize,
) -> Result<Matrix<T>> {
    check_contraction(a, b)?;

    let mut c = Matrix::new(a.rows(), b.cols());
    let n = b.cols();
    let ranges = partition_rows(a.rows(), workers);

    debug!(
        workers = ranges.len(),
        idle = ranges.iter().filter(|r| r.is_empty()).count(),
        "spawning partition workers"
    );

    thread::scope(|s| {
        let mut rest = c.as_mut_slice();
        let handles: Vec<_> = ranges
            .iter()
            .map(|&range| {
                let (block, tail) = mem::take(&mut rest).split_at_mut(range.count * n);
                rest = tail;
                s.spawn(move || multiply_block(a, b, range, block))
            })
            .collect();

        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    });

    Ok(c)
}

/// Fill `block`, which holds rows `range.start..range.end()` of the output.
fn multiply_block<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, range: RowRange, block: &mut [T]) {
    let n = b.cols();
    if range.is_empty() || n == 0 {
        return;
    }

    for (offset, c_row) in block.chunks_mut(n).enumerate() {
        row_ijk(a, b, range.start + offset, c_row);
    }
}
