//! Parameters for the reference benchmark run.

/// Side length of the square input matrices.
pub const DEFAULT_SIZE: usize = 500;
/// Lower bound (inclusive) for random elements.
pub const DEFAULT_MIN: f64 = 0.0;
/// Upper bound (exclusive) for random elements.
pub const DEFAULT_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchConfig {
    pub size: usize,
    pub min: f64,
    pub max: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}
