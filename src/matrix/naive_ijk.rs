use super::dense::Matrix;
use super::scalar::Scalar;
use crate::error::{MatrixError, Result};
use tracing::instrument;

/// Serial matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop on a single thread. It is the reference
/// result the concurrent strategies are checked against.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// ```
/// use matbench::{Matrix, matmul_serial};
///
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
/// let c = matmul_serial(&a, &b).unwrap();
///
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[instrument(level = "debug", skip_all, fields(m = a.rows(), k = a.cols(), n = b.cols()))]
pub fn matmul_serial<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_contraction(a, b)?;

    let mut c = Matrix::new(a.rows(), b.cols());
    let n = b.cols();
    if n == 0 {
        return Ok(c);
    }

    for (i, c_row) in c.as_mut_slice().chunks_mut(n).enumerate() {
        row_ijk(a, b, i, c_row);
    }
    Ok(c)
}

/// Compute row `i` of `A * B` into `c_row`, j-then-k.
///
/// Every strategy funnels through here, so they all sum in the same order.
/// `c_row` must be exactly `b.cols()` long; it is overwritten, not
/// accumulated into.
pub(crate) fn row_ijk<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, i: usize, c_row: &mut [T]) {
    debug_assert_eq!(c_row.len(), b.cols());

    let a_row = a.row(i);
    let b_data = b.as_slice();
    let n = b.cols();

    for (j, out) in c_row.iter_mut().enumerate() {
        let mut sum = T::ZERO;
        for (p, &a_ip) in a_row.iter().enumerate() {
            sum += a_ip * b_data[p * n + j];
        }
        *out = sum;
    }
}

/// Fail fast unless `A` (m × k) and `B` (k × n) share `k`.
pub(crate) fn check_contraction<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()>
where
    T: Scalar,
{
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }
    Ok(())
}
