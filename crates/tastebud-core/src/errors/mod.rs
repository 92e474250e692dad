//! Error handling for tastebud.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod tastebud_error;

pub use config_error::ConfigError;
pub use error_code::TastebudErrorCode;
pub use input_error::InvalidInputError;
pub use tastebud_error::TastebudError;
