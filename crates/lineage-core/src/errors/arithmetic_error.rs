//! Raw arithmetic errors.

use super::error_code::{self, LineageErrorCode};

/// Failures of the underlying raw operation.
///
/// These are produced before any provenance is recorded, so an operation
/// that fails with one of these leaves the log untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("{op}: arithmetic overflow")]
    Overflow { op: &'static str },

    #[error("{op}: division by zero")]
    DivisionByZero { op: &'static str },

    #[error("{op}: math domain error: {reason}")]
    Domain { op: &'static str, reason: String },
}

impl ArithmeticError {
    /// The name of the raw operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Self::Overflow { op } | Self::DivisionByZero { op } | Self::Domain { op, .. } => op,
        }
    }

    /// Re-attribute the failure to a derived operation (e.g. `floor_div`
    /// implemented on top of `div_mod`).
    pub fn with_op(self, op: &'static str) -> Self {
        match self {
            Self::Overflow { .. } => Self::Overflow { op },
            Self::DivisionByZero { .. } => Self::DivisionByZero { op },
            Self::Domain { reason, .. } => Self::Domain { op, reason },
        }
    }
}

impl LineageErrorCode for ArithmeticError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => error_code::OVERFLOW,
            Self::DivisionByZero { .. } => error_code::DIVISION_BY_ZERO,
            Self::Domain { .. } => error_code::DOMAIN_ERROR,
        }
    }
}
