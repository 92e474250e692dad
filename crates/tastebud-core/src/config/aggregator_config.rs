//! Aggregator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAJORITY_RATIO;
use crate::errors::ConfigError;

/// Configuration for the profile aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Fraction of profiles that must list a cuisine or cooking method for it
    /// to count as common. Must lie in (0, 1]. Default: 0.5.
    pub majority_ratio: Option<f64>,
}

impl AggregatorConfig {
    /// Config with an explicit majority ratio.
    pub fn with_majority_ratio(ratio: f64) -> Self {
        Self {
            majority_ratio: Some(ratio),
        }
    }

    /// Returns the effective majority ratio, defaulting to 0.5.
    pub fn effective_majority_ratio(&self) -> f64 {
        self.majority_ratio.unwrap_or(DEFAULT_MAJORITY_RATIO)
    }

    /// Reject a ratio outside (0, 1]. NaN fails the range check too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ratio) = self.majority_ratio {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "aggregator.majority_ratio".to_string(),
                    message: "must be greater than 0.0 and at most 1.0".to_string(),
                });
            }
        }
        Ok(())
    }
}
