use proptest::prelude::*;
use tastebud_classifier::{all_rules, classify};
use tastebud_core::constants::{CUISINE_HOME_STYLE, WEIGHT_EPSILON};

fn dish_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("宫保鸡丁".to_string()),
        Just("宫爆鸡丁".to_string()),
        Just("kung pao chicken".to_string()),
        Just("麻婆豆腐".to_string()),
        Just("红烧肉".to_string()),
        Just("寿司".to_string()),
        Just("清蒸鱼".to_string()),
        "[a-z]{1,12}",
        "\\PC{1,8}",
    ]
}

// ── Cuisine weights sum to one ────────────────────────────────────────────

proptest! {
    #[test]
    fn cuisine_weights_sum_to_one(dishes in prop::collection::vec(dish_strategy(), 1..40)) {
        let profile = classify("u", &dishes).unwrap();
        let sum: f64 = profile.preferred_cuisines.iter().map(|c| c.weight).sum();
        prop_assert!((sum - 1.0).abs() < WEIGHT_EPSILON, "weights summed to {}", sum);
        prop_assert_eq!(profile.normalized_dishes.len(), dishes.len());
    }

    #[test]
    fn preferences_sorted_by_descending_weight(dishes in prop::collection::vec(dish_strategy(), 1..40)) {
        let profile = classify("u", &dishes).unwrap();
        for pair in profile.preferred_cuisines.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
    }
}

// ── Classification is pure ────────────────────────────────────────────────

proptest! {
    #[test]
    fn classify_is_idempotent(dishes in prop::collection::vec(dish_strategy(), 1..20)) {
        let first = classify("u", &dishes).unwrap();
        let second = classify("u", &dishes).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── Unmatched dishes pass through ─────────────────────────────────────────

proptest! {
    #[test]
    fn unmatched_dishes_keep_original(name in "[0-9xyzXYZ ]{1,16}") {
        prop_assume!(all_rules().iter().all(|r| !r.matches(&name)));
        let profile = classify("u", &[name.clone()]).unwrap();
        let dish = &profile.normalized_dishes[0];
        prop_assert_eq!(&dish.standard, &name);
        prop_assert_eq!(dish.cuisine.as_str(), CUISINE_HOME_STYLE);
        prop_assert!(dish.aliases.is_empty());
    }
}
