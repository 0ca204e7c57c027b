//! Tests for transform error types

use super::*;
use sluice_protocol::ProtocolError;

#[test]
fn test_error_creation() {
    let err = TransformError::unknown_scheme("rot13", &["base64", "hex"]);
    assert!(matches!(err, TransformError::UnknownScheme { .. }));

    let err = TransformError::part_failed(2, "bad input");
    assert!(matches!(err, TransformError::PartFailed { index: 2, .. }));

    let err = TransformError::config("missing scheme");
    assert!(matches!(err, TransformError::Config(_)));
}

#[test]
fn test_error_display() {
    let err = TransformError::unknown_scheme("rot13", &["base64", "hex"]);
    assert_eq!(
        err.to_string(),
        "unknown scheme 'rot13', available: [base64, hex]"
    );

    let err = TransformError::part_failed(1, CodecError::new("invalid base64"));
    assert_eq!(err.to_string(), "part 1: invalid base64");

    let err = TransformError::config("scheme must not be empty");
    assert_eq!(
        err.to_string(),
        "invalid configuration: scheme must not be empty"
    );
}

#[test]
fn test_part_failed_from_protocol_error() {
    let err = TransformError::part_failed(5, ProtocolError::out_of_range(5, 3));
    assert_eq!(
        err.to_string(),
        "part 5: part index 5 out of range for message with 3 parts"
    );
}

#[test]
fn test_only_part_failures_are_recoverable() {
    assert!(TransformError::part_failed(0, "x").is_recoverable());
    assert!(!TransformError::unknown_scheme("x", &[]).is_recoverable());
    assert!(!TransformError::config("x").is_recoverable());
}
