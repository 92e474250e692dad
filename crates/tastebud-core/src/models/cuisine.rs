use serde::{Deserialize, Serialize};

use crate::constants::{CUISINE_CANTONESE, CUISINE_HOME_STYLE, CUISINE_JAPANESE, CUISINE_SICHUAN};

/// Share of one user's dishes classified under a cuisine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisinePreference {
    pub name: String,
    /// Fraction of the user's dishes, in [0, 1].
    pub weight: f64,
}

/// Which keyword families appear anywhere in a user's dish list.
///
/// Flags are computed over the whole list, not per dish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CuisineSignals {
    /// Braised-in-chili, numbing-pepper, hot-pot style names.
    pub spicy_regional: bool,
    /// Raw fish, ramen, tempura style names.
    pub east_asian: bool,
    /// Steamed, roast-goose, barbecue-pork style names.
    pub steamed_roast_regional: bool,
}

impl CuisineSignals {
    /// Dominant cuisine by fixed priority:
    /// spicy-regional > East-Asian > steamed/roast-regional > home-style.
    pub fn main_cuisine(&self) -> &'static str {
        if self.spicy_regional {
            CUISINE_SICHUAN
        } else if self.east_asian {
            CUISINE_JAPANESE
        } else if self.steamed_roast_regional {
            CUISINE_CANTONESE
        } else {
            CUISINE_HOME_STYLE
        }
    }

    pub fn any(&self) -> bool {
        self.spicy_regional || self.east_asian || self.steamed_roast_regional
    }
}
