//! Error handling for Lineage.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod arithmetic_error;
pub mod config_error;
pub mod error_code;
pub mod lineage_error;
pub mod log_error;
pub mod shape_error;

pub use arithmetic_error::ArithmeticError;
pub use config_error::ConfigError;
pub use error_code::LineageErrorCode;
pub use lineage_error::{LineageError, LineageResult};
pub use log_error::LogError;
pub use shape_error::ShapeError;
