//! Concurrent multiplication strategies.
//!
//! Both strategies split the output by row and hand each unit of work an
//! exclusive `&mut` slice of the rows it owns, so the inputs are shared
//! read-only and no locking is needed.
//!
//! Available implementations:
//! - `per_row`: one rayon task per output row (dynamic scheduling)
//! - `pool`: one OS thread per hardware thread over static row ranges

pub mod partition;
pub mod per_row;
pub mod pool;

pub use partition::{RowRange, available_parallelism, partition_rows};
pub use per_row::matmul_per_row;
pub use pool::{matmul_partitioned, matmul_partitioned_with};
