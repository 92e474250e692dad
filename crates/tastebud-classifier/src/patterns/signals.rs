//! Whole-list cuisine signal families. Latin-script entries match case-insensitively.

use super::NamedPattern;

// ── Spicy-regional (Sichuan): chili-braised, numbing pepper, hot pot ────────
dish_pattern!(
    RE_SPICY_REGIONAL,
    concat!(
        r"(?i)宫保|宫爆|麻婆|水煮|辣子|回锅|酸菜|毛血旺|口水|鱼香|夫妻肺片|火锅|串串",
        r"|kung pao|mapo"
    )
);

// ── East-Asian (Japanese): raw fish, ramen, tempura ────────────────────────
dish_pattern!(
    RE_EAST_ASIAN,
    r"(?i)寿司|刺身|拉面|天妇罗|寿喜烧|乌冬|咖喱|猪排|鳗鱼|sushi|sashimi|ramen"
);

// ── Steamed/roast-regional (Cantonese): steamed, roast goose, char siu ─────
dish_pattern!(RE_STEAMED_ROAST_REGIONAL, r"白切|烧鹅|叉烧|蒸|粤");

pub fn all_patterns() -> Vec<NamedPattern> {
    vec![
        NamedPattern {
            name: "signal_spicy_regional",
            regex: &RE_SPICY_REGIONAL,
        },
        NamedPattern {
            name: "signal_east_asian",
            regex: &RE_EAST_ASIAN,
        },
        NamedPattern {
            name: "signal_steamed_roast_regional",
            regex: &RE_STEAMED_ROAST_REGIONAL,
        },
    ]
}
