use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error(
        "matmul dimension mismatch: [{left_rows}x{left_cols}] @ [{right_rows}x{right_cols}]"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("data length {len} does not match matrix dimensions {rows}x{cols}")]
    DataLength { rows: usize, cols: usize, len: usize },
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("empty sampling range: [{min}, {max})")]
    EmptyRange { min: String, max: String },
    #[error("sampling range [{min}, {max}) is too wide to represent")]
    RangeOverflow { min: String, max: String },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MatrixError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 4,
            right_cols: 5,
        };
        assert_eq!(err.to_string(), "matmul dimension mismatch: [2x3] @ [4x5]");
    }

    #[test]
    fn test_empty_range_message() {
        let err = MatrixError::EmptyRange {
            min: "5".into(),
            max: "1".into(),
        };
        assert_eq!(err.to_string(), "empty sampling range: [5, 1)");
    }

    #[test]
    fn test_range_overflow_message() {
        let err = MatrixError::RangeOverflow {
            min: "0".into(),
            max: "inf".into(),
        };
        assert_eq!(err.to_string(), "sampling range [0, inf) is too wide to represent");
    }
}
