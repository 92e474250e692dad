//! Rule triggers and alias detectors for the dish rule table.

use super::NamedPattern;

// ── Rule triggers ──────────────────────────────────────────────────────────
dish_pattern!(RE_KUNG_PAO, r"(?i)宫保|宫爆|kung pao");
dish_pattern!(RE_MAPO_TOFU, r"(?i)麻婆豆腐|mapo tofu");
dish_pattern!(RE_BOILED_FISH, r"水煮鱼");
dish_pattern!(RE_BRAISED_PORK, r"红烧肉");
dish_pattern!(RE_SUSHI, r"(?i)寿司|sushi");
dish_pattern!(RE_SASHIMI, r"(?i)刺身|sashimi");
dish_pattern!(RE_RAMEN, r"(?i)拉面|ramen");

// ── Alias detectors ────────────────────────────────────────────────────────
dish_pattern!(RE_KUNG_PAO_MISSPELLED, r"宫爆");
dish_pattern!(RE_KUNG_PAO_LATIN, r"(?i)kung pao");
dish_pattern!(RE_MAPO_TOFU_LATIN, r"(?i)mapo tofu");
dish_pattern!(RE_SUSHI_LATIN, r"(?i)sushi");
dish_pattern!(RE_SASHIMI_LATIN, r"(?i)sashimi");
dish_pattern!(RE_RAMEN_LATIN, r"(?i)ramen");

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        NamedPattern {
            name: "rule_kung_pao",
            regex: &RE_KUNG_PAO,
        },
        NamedPattern {
            name: "rule_mapo_tofu",
            regex: &RE_MAPO_TOFU,
        },
        NamedPattern {
            name: "rule_boiled_fish",
            regex: &RE_BOILED_FISH,
        },
        NamedPattern {
            name: "rule_braised_pork",
            regex: &RE_BRAISED_PORK,
        },
        NamedPattern {
            name: "rule_sushi",
            regex: &RE_SUSHI,
        },
        NamedPattern {
            name: "rule_sashimi",
            regex: &RE_SASHIMI,
        },
        NamedPattern {
            name: "rule_ramen",
            regex: &RE_RAMEN,
        },
        NamedPattern {
            name: "alias_kung_pao_misspelled",
            regex: &RE_KUNG_PAO_MISSPELLED,
        },
        NamedPattern {
            name: "alias_kung_pao_latin",
            regex: &RE_KUNG_PAO_LATIN,
        },
        NamedPattern {
            name: "alias_mapo_tofu_latin",
            regex: &RE_MAPO_TOFU_LATIN,
        },
        NamedPattern {
            name: "alias_sushi_latin",
            regex: &RE_SUSHI_LATIN,
        },
        NamedPattern {
            name: "alias_sashimi_latin",
            regex: &RE_SASHIMI_LATIN,
        },
        NamedPattern {
            name: "alias_ramen_latin",
            regex: &RE_RAMEN_LATIN,
        },
    ]
}
