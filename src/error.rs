//! Error types for matrix construction and arithmetic.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matrix operations.
///
/// Covers shape incompatibilities between operands, ragged rows in literal
/// construction, and attempts to build empty matrices.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::ShapeMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Operand shapes are incompatible for the attempted operation.
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Literal construction from nested rows of unequal length.
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Attempt to construct a matrix with zero rows or zero columns.
    ZeroDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(f, "Matrix shape mismatch: expected {expected}, got {actual}")
            }
            MatrizError::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Ragged rows: row {row} has {actual} elements, expected {expected}"
                )
            }
            MatrizError::ZeroDimension { rows, cols } => {
                write!(f, "Matrix dimensions must be positive, got {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = MatrizError::ShapeMismatch {
            expected: "2x3".to_string(),
            actual: "3x2".to_string(),
        };
        assert!(err.to_string().contains("shape mismatch"));
        assert!(err.to_string().contains("2x3"));
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_ragged_rows_display() {
        let err = MatrizError::RaggedRows {
            row: 2,
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("3 elements"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn test_zero_dimension_display() {
        let err = MatrizError::ZeroDimension { rows: 0, cols: 5 };
        let msg = err.to_string();
        assert!(msg.contains("positive"));
        assert!(msg.contains("0x5"));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::ZeroDimension { rows: 0, cols: 0 };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("ZeroDimension"));
    }
}
