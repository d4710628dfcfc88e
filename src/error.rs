use thiserror::Error;

/// Custom error types for restpick
#[derive(Debug, Error)]
pub enum RestpickError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid config file at {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("Invalid {flag} value '{value}': expected {expected}")]
    InvalidFlag {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
