//! Umbrella error for callers that drive config loading and the pipeline together.

use super::error_code::TastebudErrorCode;
use super::{ConfigError, InvalidInputError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TastebudError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TastebudErrorCode for TastebudError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
