//! Top-level error aggregating every subsystem error via `From` conversions.

use super::error_code::LineageErrorCode;
use super::{ArithmeticError, ConfigError, LogError, ShapeError};

/// Result alias used by every fallible tracked operation.
pub type LineageResult<T> = Result<T, LineageError>;

/// Errors surfaced by tracked operations, binders, and context construction.
#[derive(Debug, thiserror::Error)]
pub enum LineageError {
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    #[error("Log error: {0}")]
    Log(#[from] LogError),

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LineageErrorCode for LineageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Arithmetic(e) => e.error_code(),
            Self::Log(e) => e.error_code(),
            Self::Shape(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
