//! # tastebud-core
//!
//! Foundation crate for the tastebud profile pipeline.
//! Defines the data model, errors, config, constants, and logging bootstrap.
//! The classifier and aggregator crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::TastebudConfig;
pub use errors::{ConfigError, InvalidInputError, TastebudError};
pub use models::{
    CuisinePreference, CuisineSignals, GroupMergeResult, NormalizedDish, PriceLevel,
    TasteProfile, UserTasteProfile,
};
