use serde::{Deserialize, Serialize};

use super::TasteProfile;

/// Group overlap derived from N user profiles.
///
/// Set-valued fields hold no duplicates and have a deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMergeResult {
    /// Cuisines listed by at least `majority_threshold` profiles, most shared first.
    pub common_cuisines: Vec<String>,
    pub avg_taste: TasteProfile,
    /// Union of preferred ingredients in first-seen order.
    pub all_ingredients: Vec<String>,
    /// Cooking methods listed by at least `majority_threshold` profiles, most shared first.
    pub common_methods: Vec<String>,
    pub profile_count: usize,
    /// `profile_count * majority_ratio`; a count must reach this to be common.
    pub majority_threshold: f64,
}

impl GroupMergeResult {
    pub fn has_common_cuisine(&self) -> bool {
        !self.common_cuisines.is_empty()
    }
}
