//! Ordered first-match dish rules.
//!
//! Triggers are not mutually exclusive: "寿司拉面" satisfies both the sushi and
//! the ramen rule. Only the earliest rule in `RULES` applies, so the table
//! order is the precedence.

use std::sync::LazyLock;

use regex::Regex;
use tastebud_core::constants::{CUISINE_HOME_STYLE, CUISINE_JAPANESE, CUISINE_SICHUAN};
use tastebud_core::models::NormalizedDish;

use crate::patterns::{self, dishes::*};

/// Why an alias was attached to a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    /// The input used a known misspelling; the alias marks the correction.
    Misspelling,
    /// The input contained a Latin-script name for the dish.
    Transliteration,
}

/// Attach `alias` when `detector` matches the raw dish string.
pub struct AliasRule {
    pub kind: AliasKind,
    pub detector: &'static LazyLock<Option<Regex>>,
    pub alias: &'static str,
}

/// One row of the rule table.
pub struct DishRule {
    pub name: &'static str,
    pub trigger: &'static LazyLock<Option<Regex>>,
    pub standard: &'static str,
    pub cuisine: &'static str,
    pub aliases: &'static [AliasRule],
}

impl DishRule {
    pub fn matches(&self, dish: &str) -> bool {
        patterns::is_match(self.trigger, dish)
    }

    /// Alias rules whose detector matches `dish`, in rule order.
    pub fn matching_aliases<'a>(&'a self, dish: &'a str) -> impl Iterator<Item = &'a AliasRule> {
        self.aliases
            .iter()
            .filter(move |a| patterns::is_match(a.detector, dish))
    }

    /// Normalize `dish` under this rule, collecting aliases in rule order.
    pub fn apply(&self, dish: &str) -> NormalizedDish {
        let mut aliases = Vec::new();
        for alias in self.matching_aliases(dish) {
            if alias.kind == AliasKind::Misspelling {
                tracing::debug!(rule = self.name, dish, "corrected misspelled dish name");
            }
            aliases.push(alias.alias.to_string());
        }
        NormalizedDish {
            original: dish.to_string(),
            standard: self.standard.to_string(),
            cuisine: self.cuisine.to_string(),
            aliases,
        }
    }
}

static KUNG_PAO_ALIASES: [AliasRule; 2] = [
    AliasRule {
        kind: AliasKind::Misspelling,
        detector: &RE_KUNG_PAO_MISSPELLED,
        alias: "宫保鸡丁（错别字纠正）",
    },
    AliasRule {
        kind: AliasKind::Transliteration,
        detector: &RE_KUNG_PAO_LATIN,
        alias: "kung pao chicken",
    },
];

static MAPO_TOFU_ALIASES: [AliasRule; 1] = [AliasRule {
    kind: AliasKind::Transliteration,
    detector: &RE_MAPO_TOFU_LATIN,
    alias: "mapo tofu",
}];

static SUSHI_ALIASES: [AliasRule; 1] = [AliasRule {
    kind: AliasKind::Transliteration,
    detector: &RE_SUSHI_LATIN,
    alias: "sushi",
}];

static SASHIMI_ALIASES: [AliasRule; 1] = [AliasRule {
    kind: AliasKind::Transliteration,
    detector: &RE_SASHIMI_LATIN,
    alias: "sashimi",
}];

static RAMEN_ALIASES: [AliasRule; 1] = [AliasRule {
    kind: AliasKind::Transliteration,
    detector: &RE_RAMEN_LATIN,
    alias: "ramen",
}];

static RULES: [DishRule; 7] = [
    DishRule {
        name: "kung_pao_chicken",
        trigger: &RE_KUNG_PAO,
        standard: "宫保鸡丁",
        cuisine: CUISINE_SICHUAN,
        aliases: &KUNG_PAO_ALIASES,
    },
    DishRule {
        name: "mapo_tofu",
        trigger: &RE_MAPO_TOFU,
        standard: "麻婆豆腐",
        cuisine: CUISINE_SICHUAN,
        aliases: &MAPO_TOFU_ALIASES,
    },
    DishRule {
        name: "boiled_fish",
        trigger: &RE_BOILED_FISH,
        standard: "水煮鱼",
        cuisine: CUISINE_SICHUAN,
        aliases: &[],
    },
    DishRule {
        name: "braised_pork_belly",
        trigger: &RE_BRAISED_PORK,
        standard: "红烧肉",
        cuisine: CUISINE_HOME_STYLE,
        aliases: &[],
    },
    DishRule {
        name: "sushi",
        trigger: &RE_SUSHI,
        standard: "寿司",
        cuisine: CUISINE_JAPANESE,
        aliases: &SUSHI_ALIASES,
    },
    DishRule {
        name: "sashimi",
        trigger: &RE_SASHIMI,
        standard: "刺身",
        cuisine: CUISINE_JAPANESE,
        aliases: &SASHIMI_ALIASES,
    },
    DishRule {
        name: "ramen",
        trigger: &RE_RAMEN,
        standard: "拉面",
        cuisine: CUISINE_JAPANESE,
        aliases: &RAMEN_ALIASES,
    },
];

/// The rule table in precedence order.
pub fn all_rules() -> &'static [DishRule] {
    &RULES
}

/// First rule whose trigger matches `dish`.
pub fn find_rule(dish: &str) -> Option<&'static DishRule> {
    RULES.iter().find(|rule| rule.matches(dish))
}

/// Normalize one raw dish name. Unmatched names pass through as home-style
/// with no aliases.
pub fn normalize_dish(dish: &str) -> NormalizedDish {
    match find_rule(dish) {
        Some(rule) => rule.apply(dish),
        None => NormalizedDish::unmatched(dish, CUISINE_HOME_STYLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_unique() {
        let mut names: Vec<&str> = all_rules().iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all_rules().len());
    }

    #[test]
    fn test_earlier_rule_wins() {
        let rule = find_rule("寿司拉面套餐").unwrap();
        assert_eq!(rule.name, "sushi");
        let rule = find_rule("宫保麻婆豆腐").unwrap();
        assert_eq!(rule.name, "kung_pao_chicken");
    }

    #[test]
    fn test_alias_order_follows_rule() {
        let dish = normalize_dish("宫爆鸡丁 kung pao");
        assert_eq!(dish.aliases, vec!["宫保鸡丁（错别字纠正）", "kung pao chicken"]);
    }

    #[test]
    fn test_alias_kinds_distinguish_correction_from_transliteration() {
        let rule = find_rule("宫爆鸡丁 kung pao").unwrap();
        let kinds: Vec<AliasKind> = rule
            .matching_aliases("宫爆鸡丁 kung pao")
            .map(|a| a.kind)
            .collect();
        assert_eq!(kinds, vec![AliasKind::Misspelling, AliasKind::Transliteration]);

        let latin_only: Vec<AliasKind> =
            rule.matching_aliases("Kung Pao Chicken").map(|a| a.kind).collect();
        assert_eq!(latin_only, vec![AliasKind::Transliteration]);
    }

    #[test]
    fn test_unmatched_passthrough() {
        let dish = normalize_dish("西红柿炒蛋");
        assert_eq!(dish.standard, "西红柿炒蛋");
        assert_eq!(dish.cuisine, CUISINE_HOME_STYLE);
        assert!(dish.aliases.is_empty());
    }
}
