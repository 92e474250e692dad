use serde::{Deserialize, Serialize};

/// Five independent flavor intensities, each in [0, 1].
///
/// The components are separate estimates and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TasteProfile {
    pub spicy: f64,
    pub sweet: f64,
    pub salty: f64,
    pub sour: f64,
    pub numbing: f64,
}

impl TasteProfile {
    pub const fn new(spicy: f64, sweet: f64, salty: f64, sour: f64, numbing: f64) -> Self {
        Self {
            spicy,
            sweet,
            salty,
            sour,
            numbing,
        }
    }

    /// Components in declaration order.
    pub fn components(&self) -> [f64; 5] {
        [self.spicy, self.sweet, self.salty, self.sour, self.numbing]
    }

    /// True when every component lies in [0, 1].
    pub fn is_normalized(&self) -> bool {
        self.components().iter().all(|c| (0.0..=1.0).contains(c))
    }
}
