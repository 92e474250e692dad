//! Venue recommendation derived from a merge result.

use serde::{Deserialize, Serialize};
use tastebud_core::models::GroupMergeResult;

/// What to suggest when the group shares no cuisine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    /// A fusion or pan-Asian restaurant.
    FusionRestaurant,
    /// A buffet where everyone picks their own.
    Buffet,
    /// Order separately and eat together.
    SeparateOrders,
}

/// Group-level suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// The most widely shared common cuisine.
    Cuisine { name: String },
    /// No shared cuisine; fallbacks in preference order.
    Divergent { fallbacks: Vec<FallbackStrategy> },
}

/// Recommend the top common cuisine, or the fallback strategies when tastes diverge.
pub fn recommend(result: &GroupMergeResult) -> Recommendation {
    match result.common_cuisines.first() {
        Some(name) => Recommendation::Cuisine { name: name.clone() },
        None => Recommendation::Divergent {
            fallbacks: vec![
                FallbackStrategy::FusionRestaurant,
                FallbackStrategy::Buffet,
                FallbackStrategy::SeparateOrders,
            ],
        },
    }
}
