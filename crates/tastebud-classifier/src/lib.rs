//! # tastebud-classifier
//!
//! Maps a user's free-text dish names to a normalized taste profile.
//! Keyword families set whole-list cuisine signals, an ordered first-match
//! rule table normalizes each dish, and a signal-keyed constant table supplies
//! taste, ingredients, cooking methods, and price level.

pub mod classifier;
pub mod patterns;
pub mod rules;
pub mod signal_table;
pub mod signals;
pub mod weights;

pub use classifier::{classify, clean_dishes, DishClassifier};
pub use rules::{all_rules, find_rule, normalize_dish, AliasKind, AliasRule, DishRule};
pub use signal_table::SignalProfile;
pub use signals::detect_signals;
pub use weights::distribute_weights;
