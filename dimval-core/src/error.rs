//! Error types for quantity construction and arithmetic.

use crate::dimension::Dimensions;

/// Result type for fallible quantity operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for quantity, vector, matrix and registry operations.
///
/// Every variant carries the sizes or values that caused it so that callers can report
/// the offending operand without re-inspecting it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("cannot construct a {0} from zero values")]
    EmptyValues(&'static str),

    #[error("declared length must be greater than zero")]
    ZeroLength,

    #[error("index {index} out of range (valid range is 0..{len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("index ({row}, {col}) out of range (valid range is 0..{rows}, 0..{cols})")]
    MatrixIndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("declared shape {rows}x{cols} exceeds the addressable size")]
    ShapeTooLarge { rows: usize, cols: usize },

    #[error("sparse key {key} out of range for declared length {len}")]
    SparseIndexOutOfRange { key: usize, len: usize },

    #[error("operands have different lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("operands have different shapes: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix is not square: rows={rows}, cols={cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch: expected [{expected}], found [{found}]")]
    DimensionMismatch {
        expected: Dimensions,
        found: Dimensions,
    },

    #[error("conversion factor must be finite and non-zero, got {0}")]
    InvalidFactor(f64),

    #[error("conversion offset must be finite, got {0}")]
    InvalidOffset(f64),

    #[error("invalid dimensions `{input}`: {reason}")]
    InvalidDimensions { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_sizes() {
        let err = Error::LengthMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "operands have different lengths: 3 vs 4");

        let err = Error::IndexOutOfBounds { index: 7, len: 4 };
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("0..4"));

        let err = Error::ShapeTooLarge { rows: 3, cols: 5 };
        assert!(err.to_string().contains("3x5"));
    }

    #[test]
    fn dimension_mismatch_uses_canonical_form() {
        let err = Error::DimensionMismatch {
            expected: Dimensions::new([0, 0, 1, 1, -2, 0, 0, 0, 0]),
            found: Dimensions::DIMENSIONLESS,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected [kg.m/s2], found [1]"
        );
    }
}
