//! Unit tests for logging configuration

use tracing::Level;

use pta_infrastructure::config::LoggingConfig;
use pta_infrastructure::logging::parse_log_level;

#[test]
fn test_parse_valid_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("Info").unwrap(), Level::INFO);
}

#[test]
fn test_parse_rejects_unknown_level() {
    let err = parse_log_level("loud").unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}
