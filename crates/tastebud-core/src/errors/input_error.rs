//! Caller errors: empty collections handed to the pure entry points.

use super::error_code::{self, TastebudErrorCode};

/// Rejected input. Both variants are programmer errors and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("dish list for user {user_id} is empty")]
    EmptyDishList { user_id: String },

    #[error("cannot merge an empty profile list")]
    EmptyProfileList,
}

impl TastebudErrorCode for InvalidInputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
