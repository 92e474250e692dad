//! Compiled keyword patterns behind the signal families and the dish rule table.

use regex::Regex;
use std::sync::LazyLock;

/// Declare a lazily compiled pattern. A pattern that fails to compile becomes
/// `None` and never matches; `failed_patterns` reports it.
macro_rules! dish_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}

pub mod dishes;
pub mod signals;

/// A compiled pattern with a stable name for health reporting.
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

/// Containment test. Uncompiled patterns never match.
pub fn is_match(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(text))
}

/// The three whole-list signal families.
pub fn signal_patterns() -> Vec<NamedPattern> {
    signals::all_patterns()
}

/// Rule triggers and alias detectors.
pub fn dish_patterns() -> Vec<NamedPattern> {
    dishes::all_patterns()
}

/// Every pattern the classifier relies on: signal families, rule triggers, alias detectors.
pub fn all_patterns() -> Vec<NamedPattern> {
    let mut all = signal_patterns();
    all.extend(dish_patterns());
    all
}

/// Names of patterns that failed to compile.
pub fn failed_patterns() -> Vec<&'static str> {
    all_patterns()
        .into_iter()
        .filter(|p| p.regex.is_none())
        .map(|p| p.name)
        .collect()
}
