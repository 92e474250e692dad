//! # tastebud-aggregator
//!
//! Merges per-user taste profiles into group overlap statistics: common
//! cuisines and cooking methods under a majority threshold, averaged taste,
//! and the ingredient union. Also derives the group recommendation.

pub mod aggregator;
pub mod majority;
pub mod recommend;

pub use aggregator::{merge, ProfileAggregator};
pub use majority::{majority_threshold, PresenceCounter};
pub use recommend::{recommend, FallbackStrategy, Recommendation};
