use thiserror::Error;

/// Errors raised by the dense tensor implementation.
#[derive(Debug, Error, PartialEq)]
pub enum TensorError {
    #[error("shape ({rows}, {cols}) does not match {len} elements")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
