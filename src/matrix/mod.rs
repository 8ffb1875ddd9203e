//! Matrix storage and the serial baseline.
//!
//! The serial multiplier here is the correctness reference; its row kernel
//! is shared with the concurrent strategies in [`crate::threaded`].

pub mod dense;
pub mod naive_ijk;
pub mod scalar;

pub use dense::Matrix;
pub use naive_ijk::matmul_serial;
pub use scalar::Scalar;
