//! Signal-keyed constants for taste, ingredients, cooking methods, and price.
//!
//! These values are a known simplification of the mock classifier: they are
//! selected by the `(spicy_regional, east_asian)` flag pair alone and are not
//! derived from the dishes themselves. The steamed/roast-regional flag only
//! influences `main_cuisine`.

use tastebud_core::models::{CuisineSignals, PriceLevel, TasteProfile};

/// Constant metadata for one flag combination.
#[derive(Debug, PartialEq)]
pub struct SignalProfile {
    pub taste: TasteProfile,
    pub ingredients: &'static [&'static str],
    pub cooking_methods: &'static [&'static str],
    pub price_level: PriceLevel,
}

const INGREDIENTS: &[&str] = &["鸡肉", "猪肉", "蔬菜", "豆制品"];
const SPICY_METHODS: &[&str] = &["爆炒", "红烧", "水煮"];
const MILD_METHODS: &[&str] = &["清蒸", "煮", "烤"];

/// Indexed by `(spicy_regional as usize) << 1 | east_asian as usize`.
static SIGNAL_TABLE: [SignalProfile; 4] = [
    // neither
    SignalProfile {
        taste: TasteProfile::new(0.3, 0.4, 0.5, 0.2, 0.1),
        ingredients: INGREDIENTS,
        cooking_methods: MILD_METHODS,
        price_level: PriceLevel::Moderate,
    },
    // east-asian only
    SignalProfile {
        taste: TasteProfile::new(0.1, 0.3, 0.5, 0.2, 0.1),
        ingredients: INGREDIENTS,
        cooking_methods: MILD_METHODS,
        price_level: PriceLevel::Upscale,
    },
    // spicy-regional only
    SignalProfile {
        taste: TasteProfile::new(0.8, 0.4, 0.5, 0.3, 0.6),
        ingredients: INGREDIENTS,
        cooking_methods: SPICY_METHODS,
        price_level: PriceLevel::Moderate,
    },
    // both
    SignalProfile {
        taste: TasteProfile::new(0.8, 0.3, 0.5, 0.3, 0.6),
        ingredients: INGREDIENTS,
        cooking_methods: SPICY_METHODS,
        price_level: PriceLevel::Upscale,
    },
];

fn table_index(signals: &CuisineSignals) -> usize {
    (usize::from(signals.spicy_regional) << 1) | usize::from(signals.east_asian)
}

/// Constants for a set of detected signals.
pub fn lookup(signals: &CuisineSignals) -> &'static SignalProfile {
    &SIGNAL_TABLE[table_index(signals)]
}
