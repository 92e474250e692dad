//! DishClassifier: raw dish list in, immutable `UserTasteProfile` out.

use tastebud_core::config::{ClassifierConfig, TastebudConfig};
use tastebud_core::errors::InvalidInputError;
use tastebud_core::models::{NormalizedDish, UserTasteProfile};

use crate::patterns;
use crate::rules::normalize_dish;
use crate::signal_table;
use crate::signals::detect_signals;
use crate::weights::distribute_weights;

/// Rule-based classifier for one user's dish list.
///
/// Holds only configuration; every `classify` call is independent and pure.
#[derive(Debug, Clone, Default)]
pub struct DishClassifier {
    config: ClassifierConfig,
}

impl DishClassifier {
    /// Create a classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        let failed = patterns::failed_patterns();
        if !failed.is_empty() {
            tracing::warn!(
                patterns = ?failed,
                "dish patterns failed to compile; affected rules will never match"
            );
        }
        Self { config }
    }

    /// Create a classifier with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ClassifierConfig::default())
    }

    /// Create a classifier from the classifier section of a full config.
    pub fn from_config(config: &TastebudConfig) -> Self {
        Self::new(config.classifier.clone())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Names of patterns that failed to compile. Empty when every rule and
    /// signal family is live.
    pub fn pattern_health(&self) -> Vec<&'static str> {
        patterns::failed_patterns()
    }

    /// Classify a user's dishes into a taste profile.
    ///
    /// `raw_dishes` may contain duplicates; its order sets the tie-break among
    /// equally weighted cuisines. Fails when the list is empty (after cleaning,
    /// if `clean_input` is enabled).
    pub fn classify<S: AsRef<str>>(
        &self,
        user_id: &str,
        raw_dishes: &[S],
    ) -> Result<UserTasteProfile, InvalidInputError> {
        let dishes: Vec<String> = if self.config.effective_clean_input() {
            clean_dishes(raw_dishes)
        } else {
            raw_dishes.iter().map(|d| d.as_ref().to_string()).collect()
        };

        if dishes.is_empty() {
            tracing::warn!(user_id, raw_count = raw_dishes.len(), "rejecting empty dish list");
            return Err(InvalidInputError::EmptyDishList {
                user_id: user_id.to_string(),
            });
        }

        let signals = detect_signals(&dishes);
        let normalized_dishes: Vec<NormalizedDish> =
            dishes.iter().map(|d| normalize_dish(d)).collect();
        let preferred_cuisines = distribute_weights(&normalized_dishes);
        let constants = signal_table::lookup(&signals);
        let main_cuisine = signals.main_cuisine();

        tracing::debug!(
            user_id,
            dish_count = normalized_dishes.len(),
            renamed = normalized_dishes.iter().filter(|d| d.is_renamed()).count(),
            cuisine_count = preferred_cuisines.len(),
            main_cuisine,
            "classified dish list"
        );

        Ok(UserTasteProfile {
            user_id: user_id.to_string(),
            preferred_cuisines,
            taste_profile: constants.taste,
            preferred_ingredients: to_owned_list(constants.ingredients),
            cooking_methods: to_owned_list(constants.cooking_methods),
            price_level: constants.price_level,
            normalized_dishes,
            main_cuisine: main_cuisine.to_string(),
            signals,
        })
    }
}

/// Classify with default configuration.
pub fn classify<S: AsRef<str>>(
    user_id: &str,
    raw_dishes: &[S],
) -> Result<UserTasteProfile, InvalidInputError> {
    DishClassifier::with_defaults().classify(user_id, raw_dishes)
}

/// Trim surrounding whitespace and drop entries left blank.
pub fn clean_dishes<S: AsRef<str>>(raw_dishes: &[S]) -> Vec<String> {
    raw_dishes
        .iter()
        .map(|d| d.as_ref().trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_dishes_trims_and_drops_blank() {
        let cleaned = clean_dishes(&["  寿司 ", "", "   ", "拉面"]);
        assert_eq!(cleaned, vec!["寿司", "拉面"]);
    }

    #[test]
    fn test_clean_input_keeps_verbatim_by_default() {
        let profile = classify("u", &[" 寿司 "]).unwrap();
        assert_eq!(profile.normalized_dishes[0].original, " 寿司 ");
        assert_eq!(profile.normalized_dishes[0].standard, "寿司");
    }

    #[test]
    fn test_clean_input_rejects_all_blank() {
        let classifier = DishClassifier::new(ClassifierConfig {
            clean_input: Some(true),
        });
        let err = classifier.classify("u", &["  ", ""]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::EmptyDishList {
                user_id: "u".to_string()
            }
        );
    }

    #[test]
    fn test_patterns_all_compile() {
        assert!(patterns::failed_patterns().is_empty());
        assert!(DishClassifier::with_defaults().pattern_health().is_empty());
    }

    #[test]
    fn test_pattern_groups_cover_all_patterns() {
        assert_eq!(patterns::signal_patterns().len(), 3);
        assert_eq!(patterns::dish_patterns().len(), 13);
        assert_eq!(
            patterns::all_patterns().len(),
            patterns::signal_patterns().len() + patterns::dish_patterns().len()
        );
    }
}
