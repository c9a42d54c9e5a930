//! LineageErrorCode trait for stable, machine-matchable error codes.

/// Every error enum implements this to expose a structured error code
/// string alongside its human-readable message.
pub trait LineageErrorCode {
    /// Returns the error code string (e.g., "DIVISION_BY_ZERO").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted tagged string: `[ERROR_CODE] message`.
    fn tagged_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const OVERFLOW: &str = "OVERFLOW";
pub const DIVISION_BY_ZERO: &str = "DIVISION_BY_ZERO";
pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
pub const LOG_WRITE_FAILED: &str = "LOG_WRITE_FAILED";
pub const LOG_OPEN_FAILED: &str = "LOG_OPEN_FAILED";
pub const LOG_POISONED: &str = "LOG_POISONED";
pub const LOG_CONTEXT_MISMATCH: &str = "LOG_CONTEXT_MISMATCH";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const SHAPE_ERROR: &str = "SHAPE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
