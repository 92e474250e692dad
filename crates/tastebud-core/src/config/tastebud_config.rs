//! Top-level tastebud configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AggregatorConfig, ClassifierConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

const ENV_CLEAN_INPUT: &str = "TASTEBUD_CLASSIFIER_CLEAN_INPUT";
const ENV_MAJORITY_RATIO: &str = "TASTEBUD_AGGREGATOR_MAJORITY_RATIO";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TASTEBUD_*`)
/// 3. Project config (`tastebud.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TastebudConfig {
    pub classifier: ClassifierConfig,
    pub aggregator: AggregatorConfig,
}

/// Caller-supplied overrides, the highest-priority layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub clean_input: Option<bool>,
    pub majority_ratio: Option<f64>,
}

impl TastebudConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        tracing::debug!(
            root = %root.display(),
            clean_input = config.classifier.effective_clean_input(),
            majority_ratio = config.aggregator.effective_majority_ratio(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TastebudConfig) -> Result<(), ConfigError> {
        config.aggregator.validate()
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TastebudConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TastebudConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut TastebudConfig, other: &TastebudConfig) {
        if other.classifier.clean_input.is_some() {
            base.classifier.clean_input = other.classifier.clean_input;
        }
        if other.aggregator.majority_ratio.is_some() {
            base.aggregator.majority_ratio = other.aggregator.majority_ratio;
        }
    }

    /// Apply environment variable overrides. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut TastebudConfig) {
        if let Ok(val) = std::env::var(ENV_CLEAN_INPUT) {
            match val.parse::<bool>() {
                Ok(v) => config.classifier.clean_input = Some(v),
                Err(_) => tracing::warn!(
                    var = ENV_CLEAN_INPUT,
                    value = %val,
                    "ignoring unparsable env override"
                ),
            }
        }
        if let Ok(val) = std::env::var(ENV_MAJORITY_RATIO) {
            match val.parse::<f64>() {
                Ok(v) => config.aggregator.majority_ratio = Some(v),
                Err(_) => tracing::warn!(
                    var = ENV_MAJORITY_RATIO,
                    value = %val,
                    "ignoring unparsable env override"
                ),
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut TastebudConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.clean_input {
            config.classifier.clean_input = Some(v);
        }
        if let Some(v) = overrides.majority_ratio {
            config.aggregator.majority_ratio = Some(v);
        }
    }
}
