//! Task-per-row multiplication on rayon's work-stealing pool.

use crate::error::Result;
use crate::matrix::naive_ijk::{check_contraction, row_ijk};
use crate::matrix::{Matrix, Scalar};
use tracing::{debug, instrument};

/// Multiply by spawning one task per output row.
///
/// Each task gets the `&mut` slice of its own row, so no two tasks can
/// touch the same element. Tasks go into a `rayon::scope`, which returns
/// only after all of them finish. How the `m` tasks map onto threads is up
/// to rayon's global pool; large `m` oversubscribes it on purpose, which is
/// what the benchmark compares against [`matmul_partitioned`].
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`, before any
/// task is spawned.
///
/// [`matmul_partitioned`]: super::pool::matmul_partitioned
/// [`MatrixError::DimensionMismatch`]: crate::MatrixError::DimensionMismatch
#[instrument(level = "debug", skip_all, fields(m = a.rows(), k = a.cols(), n = b.cols()))]
pub fn matmul_per_row<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_contraction(a, b)?;

    let mut c = Matrix::new(a.rows(), b.cols());
    let n = b.cols();
    // Zero-width rows: nothing to compute, and chunks_mut(0) would panic.
    if n == 0 || a.rows() == 0 {
        return Ok(c);
    }

    debug!(tasks = a.rows(), "spawning row tasks");

    rayon::scope(|s| {
        for (i, c_row) in c.as_mut_slice().chunks_mut(n).enumerate() {
            s.spawn(move |_| row_ijk(a, b, i, c_row));
        }
    });

    Ok(c)
}
