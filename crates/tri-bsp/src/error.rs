//! Error types for parsing input and building trees.

use thiserror::Error;

/// Errors that can occur while reading input or building a [`BspTree`](crate::BspTree).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BspError {
    /// Input ended before all declared values were read
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token could not be parsed as an integer of the expected kind
    #[error("invalid integer {token:?} while reading {expected}")]
    InvalidInteger { token: String, expected: &'static str },

    /// A coordinate is too large for exact integer arithmetic
    #[error("coordinate {value} out of range while reading {expected} (limit is ±{limit})")]
    CoordinateOutOfRange {
        value: i64,
        limit: i64,
        expected: &'static str,
    },

    /// A triangle references a point that does not exist
    #[error(
        "invalid triangle index: triangle {triangle} references point {index}, \
         but only {point_count} points exist"
    )]
    InvalidTriangleIndex {
        triangle: usize,
        index: usize,
        point_count: usize,
    },
}
