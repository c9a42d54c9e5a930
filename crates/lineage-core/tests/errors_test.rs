//! Tests for error codes and `From` conversions.

use lineage_core::errors::{
    ArithmeticError, ConfigError, LineageError, LineageErrorCode, LogError, ShapeError,
};

#[test]
fn arithmetic_codes_are_specific() {
    let overflow = ArithmeticError::Overflow { op: "add" };
    let zero = ArithmeticError::DivisionByZero { op: "div_mod" };
    let domain = ArithmeticError::Domain {
        op: "pow",
        reason: "negative exponent".into(),
    };
    assert_eq!(overflow.error_code(), "OVERFLOW");
    assert_eq!(zero.error_code(), "DIVISION_BY_ZERO");
    assert_eq!(domain.error_code(), "DOMAIN_ERROR");
    assert_eq!(zero.op(), "div_mod");
    assert_eq!(zero.tagged_message(), "[DIVISION_BY_ZERO] div_mod: division by zero");
}

#[test]
fn lineage_error_forwards_subsystem_codes() {
    let err: LineageError = ArithmeticError::DivisionByZero { op: "div" }.into();
    assert_eq!(err.error_code(), "DIVISION_BY_ZERO");

    let err: LineageError = LogError::Rejected {
        sink: "test".into(),
        reason: "full".into(),
    }
    .into();
    assert_eq!(err.error_code(), "LOG_WRITE_FAILED");

    let err: LineageError = ShapeError::LengthMismatch {
        shape: vec![2, 2],
        expected: 4,
        actual: 3,
    }
    .into();
    assert_eq!(err.error_code(), "SHAPE_ERROR");

    let err: LineageError = ConfigError::ValidationFailed {
        field: "identity.seed".into(),
        message: "must be greater than 0".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: LineageError = LogError::ForeignContext {
        sink: "memory".into(),
    }
    .into();
    assert_eq!(err.error_code(), "LOG_CONTEXT_MISMATCH");
}

#[test]
fn io_errors_keep_their_source() {
    use std::error::Error;

    let err = LogError::Io {
        sink: "file".into(),
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
    };
    assert!(err.source().is_some());
    assert!(err.to_string().contains("disk full"));
}
