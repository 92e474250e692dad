//! ProfileAggregator: N user profiles in, one `GroupMergeResult` out.

use tastebud_core::config::{AggregatorConfig, TastebudConfig};
use tastebud_core::errors::{ConfigError, InvalidInputError};
use tastebud_core::models::{GroupMergeResult, TasteProfile, UserTasteProfile};

use crate::majority::{majority_threshold, PresenceCounter};

/// Computes group overlap under a configurable majority ratio.
#[derive(Debug, Clone, Default)]
pub struct ProfileAggregator {
    config: AggregatorConfig,
}

impl ProfileAggregator {
    /// Create an aggregator with the given configuration.
    ///
    /// Fails when the majority ratio lies outside (0, 1] or is NaN.
    pub fn new(config: AggregatorConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "rejecting aggregator configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    /// Create an aggregator with the default 0.5 majority ratio.
    pub fn with_defaults() -> Self {
        Self {
            config: AggregatorConfig::default(),
        }
    }

    /// Create an aggregator from the aggregator section of a full config.
    pub fn from_config(config: &TastebudConfig) -> Result<Self, ConfigError> {
        Self::new(config.aggregator.clone())
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Merge profiles into group statistics. Recomputed from scratch on every call.
    pub fn merge(
        &self,
        profiles: &[UserTasteProfile],
    ) -> Result<GroupMergeResult, InvalidInputError> {
        if profiles.is_empty() {
            tracing::warn!("rejecting empty profile list");
            return Err(InvalidInputError::EmptyProfileList);
        }

        let threshold = majority_threshold(profiles.len(), self.config.effective_majority_ratio());

        let mut cuisines = PresenceCounter::new();
        let mut methods = PresenceCounter::new();
        let mut all_ingredients: Vec<String> = Vec::new();
        for profile in profiles {
            cuisines.add_profile(profile.preferred_cuisines.iter().map(|c| c.name.as_str()));
            methods.add_profile(profile.cooking_methods.iter().map(String::as_str));
            for ingredient in &profile.preferred_ingredients {
                if !all_ingredients.contains(ingredient) {
                    all_ingredients.push(ingredient.clone());
                }
            }
        }

        let result = GroupMergeResult {
            common_cuisines: cuisines.at_least(threshold),
            avg_taste: average_taste(profiles),
            all_ingredients,
            common_methods: methods.at_least(threshold),
            profile_count: profiles.len(),
            majority_threshold: threshold,
        };

        tracing::debug!(
            profile_count = result.profile_count,
            threshold,
            common_cuisines = result.common_cuisines.len(),
            common_methods = result.common_methods.len(),
            ingredients = result.all_ingredients.len(),
            "merged taste profiles"
        );

        Ok(result)
    }
}

/// Merge with the default majority ratio.
pub fn merge(profiles: &[UserTasteProfile]) -> Result<GroupMergeResult, InvalidInputError> {
    ProfileAggregator::with_defaults().merge(profiles)
}

/// Per-component arithmetic mean. `profiles` is non-empty.
fn average_taste(profiles: &[UserTasteProfile]) -> TasteProfile {
    let n = profiles.len() as f64;
    let sums = profiles.iter().fold([0.0_f64; 5], |mut acc, p| {
        for (sum, component) in acc.iter_mut().zip(p.taste_profile.components()) {
            *sum += component;
        }
        acc
    });
    let [spicy, sweet, salty, sour, numbing] = sums.map(|s| s / n);
    TasteProfile::new(spicy, sweet, salty, sour, numbing)
}
