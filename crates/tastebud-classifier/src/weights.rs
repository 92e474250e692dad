//! Cuisine weight distribution over one user's normalized dishes.

use tastebud_core::models::{CuisinePreference, NormalizedDish};

/// Fraction of dishes per cuisine, sorted by descending count.
///
/// Ties keep the order in which each cuisine first appeared. Returns an empty
/// list for empty input; callers reject empty dish lists before getting here.
pub fn distribute_weights(dishes: &[NormalizedDish]) -> Vec<CuisinePreference> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for dish in dishes {
        match counts.iter_mut().find(|(name, _)| *name == dish.cuisine) {
            Some((_, count)) => *count += 1,
            None => counts.push((dish.cuisine.as_str(), 1)),
        }
    }

    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = dishes.len() as f64;
    counts
        .into_iter()
        .map(|(name, count)| CuisinePreference {
            name: name.to_string(),
            weight: count as f64 / total,
        })
        .collect()
}
