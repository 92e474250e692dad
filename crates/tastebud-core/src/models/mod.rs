//! Data model shared by the classifier and the aggregator.

pub mod cuisine;
pub mod dish;
pub mod group;
pub mod price;
pub mod profile;
pub mod taste;

pub use cuisine::{CuisinePreference, CuisineSignals};
pub use dish::NormalizedDish;
pub use group::GroupMergeResult;
pub use price::{InvalidPriceLevel, PriceLevel};
pub use profile::UserTasteProfile;
pub use taste::TasteProfile;
