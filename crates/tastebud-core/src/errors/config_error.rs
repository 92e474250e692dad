//! Configuration errors.

use super::error_code::{self, TastebudErrorCode};

/// Errors raised while loading or validating `TastebudConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl TastebudErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
