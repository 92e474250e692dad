//! Configuration system for tastebud.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod aggregator_config;
pub mod classifier_config;
pub mod tastebud_config;

pub use aggregator_config::AggregatorConfig;
pub use classifier_config::ClassifierConfig;
pub use tastebud_config::{ConfigOverrides, TastebudConfig};
