//! Tests for restpick error types

use super::*;

#[test]
fn test_invalid_url_message() {
    let err = RestpickError::InvalidUrl("not-a-url".to_string());
    assert_eq!(err.to_string(), "Invalid endpoint URL: not-a-url");
}

#[test]
fn test_invalid_config_message_includes_path() {
    let err = RestpickError::InvalidConfig {
        path: "/home/user/.config/restpick/config.toml".to_string(),
        message: "unknown field `debounce`".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/home/user/.config/restpick/config.toml"));
    assert!(msg.contains("unknown field"));
}

#[test]
fn test_invalid_flag_message() {
    let err = RestpickError::InvalidFlag {
        flag: "--param",
        value: "somente_ativos".to_string(),
        expected: "key=value",
    };
    assert_eq!(
        err.to_string(),
        "Invalid --param value 'somente_ativos': expected key=value"
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RestpickError = io_err.into();
    assert!(matches!(err, RestpickError::Io(_)));
    assert!(err.to_string().contains("file not found"));
}
