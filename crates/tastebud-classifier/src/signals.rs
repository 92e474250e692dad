//! Whole-list cuisine signal detection.

use std::sync::LazyLock;

use regex::Regex;
use tastebud_core::models::CuisineSignals;

use crate::patterns::{self, signals::*};

/// Scan every dish for each keyword family. A flag is set when any dish in the
/// list contains the family's pattern.
pub fn detect_signals<S: AsRef<str>>(dishes: &[S]) -> CuisineSignals {
    let any = |regex: &LazyLock<Option<Regex>>| {
        dishes
            .iter()
            .any(|d| patterns::is_match(regex, d.as_ref()))
    };
    CuisineSignals {
        spicy_regional: any(&RE_SPICY_REGIONAL),
        east_asian: any(&RE_EAST_ASIAN),
        steamed_roast_regional: any(&RE_STEAMED_ROAST_REGIONAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tastebud_core::constants::{CUISINE_CANTONESE, CUISINE_HOME_STYLE, CUISINE_SICHUAN};

    #[test]
    fn test_priority_spicy_over_others() {
        let signals = detect_signals(&["寿司", "叉烧", "麻婆豆腐"]);
        assert!(signals.spicy_regional && signals.east_asian && signals.steamed_roast_regional);
        assert_eq!(signals.main_cuisine(), CUISINE_SICHUAN);
    }

    #[test]
    fn test_steamed_only() {
        let signals = detect_signals(&["清蒸鱼", "白切鸡"]);
        assert_eq!(signals.main_cuisine(), CUISINE_CANTONESE);
    }

    #[test]
    fn test_latin_case_insensitive() {
        let signals = detect_signals(&["KUNG PAO Chicken"]);
        assert!(signals.spicy_regional);
        let signals = detect_signals(&["Sushi platter"]);
        assert!(signals.east_asian);
    }

    #[test]
    fn test_no_signal() {
        let signals = detect_signals(&["西红柿炒蛋", "地三鲜"]);
        assert!(!signals.any());
        assert_eq!(signals.main_cuisine(), CUISINE_HOME_STYLE);
    }
}
