//! Shaped-collection errors.

use super::error_code::{self, LineageErrorCode};

/// Errors raised when constructing or indexing a shaped collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("shape {shape:?} holds {expected} elements, got {actual}")]
    LengthMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("shape {shape:?} overflows the addressable element count")]
    TooLarge { shape: Vec<usize> },

    #[error("coordinate {coordinate:?} is out of bounds for shape {shape:?}")]
    OutOfBounds {
        coordinate: Vec<usize>,
        shape: Vec<usize>,
    },
}

impl LineageErrorCode for ShapeError {
    fn error_code(&self) -> &'static str {
        error_code::SHAPE_ERROR
    }
}
