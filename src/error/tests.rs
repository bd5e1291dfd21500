//! Tests for smartnav error handling

use super::*;
use std::io;

#[test]
fn test_error_severity_display() {
    assert_eq!(format!("{}", ErrorSeverity::Info), "INFO");
    assert_eq!(format!("{}", ErrorSeverity::Warning), "WARN");
    assert_eq!(format!("{}", ErrorSeverity::Error), "ERROR");
    assert_eq!(format!("{}", ErrorSeverity::Critical), "CRITICAL");
}

#[test]
fn test_error_severity_ordering() {
    assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_error_type_display() {
    assert_eq!(format!("{}", ErrorType::Io), "IO");
    assert_eq!(format!("{}", ErrorType::Parse), "Parse");
    assert_eq!(format!("{}", ErrorType::Settings), "Settings");
    assert_eq!(format!("{}", ErrorType::Syntax), "Syntax");
    assert_eq!(format!("{}", ErrorType::Navigation), "Navigation");
    assert_eq!(format!("{}", ErrorType::Internal), "Internal");
    assert_eq!(format!("{}", ErrorType::Other), "Other");
}

#[test]
fn test_constructors_set_severity() {
    let err = NavError::new(ErrorType::Navigation, "CURSOR_OUT_OF_RANGE", "line 9");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.kind, ErrorType::Navigation);
    assert_eq!(err.code, "CURSOR_OUT_OF_RANGE");

    let err = NavError::critical(ErrorType::Syntax, "LANGUAGE_ERROR", "abi mismatch");
    assert_eq!(err.severity, ErrorSeverity::Critical);

    let err = NavError::warning(ErrorType::Settings, "UNKNOWN_KEY", "hyper+x");
    assert_eq!(err.severity, ErrorSeverity::Warning);
}

#[test]
fn test_display() {
    let err = NavError::new(ErrorType::Io, "E001", "test msg");
    assert_eq!(format!("{}", err), "[ERROR] IO(E001): test msg");

    let std_err: &dyn std::error::Error = &err;
    assert_eq!(format!("{}", std_err), "[ERROR] IO(E001): test msg");
}

#[test]
fn test_contains_msg() {
    let err = NavError::new(ErrorType::Parse, "E", "unknown command nav:teleport");
    assert!(err.contains_msg("nav:teleport"));
    assert!(!err.contains_msg("smart_up"));
}

#[test]
fn test_result_alias() {
    fn produce_error() -> Result<()> {
        Err(NavError::new(ErrorType::Other, "FAIL", "reason"))
    }

    assert_eq!(produce_error().unwrap_err().code, "FAIL");
}

#[test]
fn test_from_conversions() {
    let err_string: NavError = "string error".to_string().into();
    assert_eq!(err_string.code, "GENERIC_ERROR");
    assert_eq!(err_string.kind, ErrorType::Other);

    let err_str: NavError = "str error".into();
    assert_eq!(err_str.message, "str error");

    let err_io: NavError = io::Error::new(io::ErrorKind::NotFound, "not found").into();
    assert_eq!(err_io.kind, ErrorType::Io);
    assert_eq!(err_io.code, "IO_ERROR");
    assert!(err_io.contains_msg("not found"));
}
