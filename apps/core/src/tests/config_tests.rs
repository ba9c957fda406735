//! Configuration Tests
//!
//! Environment parsing and validation of `HostConfig`. Variables are scoped
//! with `temp_env` so tests do not leak into each other.

use crate::config::{HostConfig, LogFormat, DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_MESSAGE_BYTES};
use crate::error::AppError;
use std::time::Duration;

const KEYS: [&str; 4] = [
    "PROMPTY_DEBOUNCE_MS",
    "PROMPTY_MAX_MESSAGE_BYTES",
    "PROMPTY_LOG",
    "PROMPTY_LOG_FORMAT",
];

fn with_env<R>(values: [Option<&str>; 4], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = KEYS.iter().copied().zip(values).collect();
    temp_env::with_vars(vars, f)
}

#[test]
fn test_defaults_when_unset() {
    let config = with_env([None, None, None, None], HostConfig::from_vars).unwrap();

    assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert_eq!(config.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn test_values_are_read() {
    let config = with_env(
        [Some("50"), Some("2048"), Some("prompty_core=debug"), Some("json")],
        HostConfig::from_vars,
    )
    .unwrap();

    assert_eq!(config.debounce(), Duration::from_millis(50));
    assert_eq!(config.max_message_bytes, 2048);
    assert_eq!(config.log_filter, "prompty_core=debug");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = with_env([Some("  "), Some(""), None, Some(" ")], HostConfig::from_vars).unwrap();

    assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert_eq!(config.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES);
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn test_invalid_number_is_config_error() {
    let result = with_env([Some("fast"), None, None, None], HostConfig::from_vars);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_out_of_range_is_config_error() {
    let result = with_env([Some("10000"), None, None, None], HostConfig::from_vars);
    assert!(matches!(result, Err(AppError::Config(_))));

    let result = with_env([None, Some("16"), None, None], HostConfig::from_vars);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_empty_log_filter_is_rejected() {
    let result = with_env([None, None, Some(""), None], HostConfig::from_vars);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_unknown_log_format_is_rejected() {
    let result = with_env([None, None, None, Some("xml")], HostConfig::from_vars);
    assert!(matches!(result, Err(AppError::Config(_))));
}
