//! Stable string codes for every error kind, for callers that branch on
//! error category without matching on variants.

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Implemented by every tastebud error enum.
pub trait TastebudErrorCode {
    fn error_code(&self) -> &'static str;
}
