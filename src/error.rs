use std::error::Error;
use std::fmt;

/// Binary operations that validate operand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    MultiplyElements,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::MultiplyElements => write!(f, "multiply elementwise"),
        }
    }
}

/// Errors returned by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction input is neither a nested sequence nor a dimensions configuration.
    InvalidArgument(String),
    /// A requested row or column count is not a positive integer.
    InvalidDimensions { rows: i64, cols: i64 },
    /// A nested-sequence row disagrees with the length of the first row.
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Operand shapes are incompatible for `operation`.
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidArgument(reason) => {
                write!(f, "You must supply an object or an array: {}", reason)
            }
            MatrixError::InvalidDimensions { rows, cols } => write!(
                f,
                "Matrix dimensions must be positive (got {} rows, {} columns)",
                rows, cols
            ),
            MatrixError::ShapeMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} values but the first row has {}",
                row, found, expected
            ),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                match operation {
                    Operation::Multiply => write!(
                        f,
                        "You can only multiply matrices where number of columns in first equals number of rows in second"
                    )?,
                    _ => write!(
                        f,
                        "You can only {} matrices with equal dimensions",
                        operation
                    )?,
                }
                write!(
                    f,
                    " ({}x{} vs {}x{})",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl Error for MatrixError {}
