//! Unit tests for domain error types

use pta_domain::error::Error;

#[test]
fn test_helper_constructors() {
    let err = Error::embedding("model missing");
    assert!(matches!(err, Error::Embedding { .. }));
    assert_eq!(err.to_string(), "Embedding provider error: model missing");

    let err = Error::clustering("sweep failed");
    assert_eq!(err.to_string(), "Clustering error: sweep failed");

    let err = Error::projection("bad perplexity");
    assert_eq!(err.to_string(), "Projection error: bad perplexity");

    let err = Error::invalid_argument("empty batch");
    assert_eq!(err.to_string(), "Invalid argument: empty batch");
}

#[test]
fn test_io_error_with_source() {
    let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = Error::io_with_source("reading records", inner);
    assert_eq!(err.to_string(), "I/O error: reading records");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_io_error_from_std() {
    let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = inner.into();
    assert!(matches!(err, Error::IoSimple { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: Error = parse_err.into();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_string_conversions() {
    let err: Error = "plain message".into();
    assert!(matches!(err, Error::String(_)));

    let err: Error = String::from("owned message").into();
    assert_eq!(err.to_string(), "String error: owned message");
}

#[test]
fn test_configuration_with_source() {
    let inner = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad toml");
    let err = Error::configuration_with_source("loading config", inner);
    assert_eq!(err.to_string(), "Configuration error: loading config");
    assert!(std::error::Error::source(&err).is_some());
}
