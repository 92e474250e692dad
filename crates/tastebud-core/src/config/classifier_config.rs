//! Classifier configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CLEAN_INPUT;

/// Configuration for the dish classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Trim dish names and drop blank entries before classification. Default: false.
    pub clean_input: Option<bool>,
}

impl ClassifierConfig {
    /// Returns the effective input-cleaning flag, defaulting to false.
    pub fn effective_clean_input(&self) -> bool {
        self.clean_input.unwrap_or(DEFAULT_CLEAN_INPUT)
    }
}
