use serde::{Deserialize, Serialize};

use super::{CuisinePreference, CuisineSignals, NormalizedDish, PriceLevel, TasteProfile};

/// Classifier output for one user. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTasteProfile {
    /// Opaque caller identifier, passed through unchanged.
    pub user_id: String,
    /// Sorted by descending dish count, ties by first-encountered cuisine.
    pub preferred_cuisines: Vec<CuisinePreference>,
    pub taste_profile: TasteProfile,
    pub preferred_ingredients: Vec<String>,
    pub cooking_methods: Vec<String>,
    pub price_level: PriceLevel,
    pub normalized_dishes: Vec<NormalizedDish>,
    /// Highest-priority cuisine signal found in the list.
    pub main_cuisine: String,
    pub signals: CuisineSignals,
}

impl UserTasteProfile {
    /// Weight of `cuisine` in this profile, or 0.0 when absent.
    pub fn cuisine_weight(&self, cuisine: &str) -> f64 {
        self.preferred_cuisines
            .iter()
            .find(|c| c.name == cuisine)
            .map_or(0.0, |c| c.weight)
    }

    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.preferred_cuisines.iter().any(|c| c.name == cuisine)
    }

    pub fn dish_count(&self) -> usize {
        self.normalized_dishes.len()
    }
}
