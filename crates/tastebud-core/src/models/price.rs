use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-capita spending tier, serialized as its integer level 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PriceLevel {
    /// Under 30 per person.
    Budget = 1,
    /// 30 to 60 per person.
    Moderate = 2,
    /// 60 to 100 per person.
    Upscale = 3,
    /// Over 100 per person.
    Premium = 4,
}

impl PriceLevel {
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Per-capita spend band as `(min, max)`; `max` is `None` for the open top tier.
    pub fn per_capita_range(self) -> (u32, Option<u32>) {
        match self {
            Self::Budget => (0, Some(30)),
            Self::Moderate => (30, Some(60)),
            Self::Upscale => (60, Some(100)),
            Self::Premium => (100, None),
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.level()
    }
}

/// Integer outside the 1..=4 price scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("price level must be between 1 and 4, got {0}")]
pub struct InvalidPriceLevel(pub u8);

impl TryFrom<u8> for PriceLevel {
    type Error = InvalidPriceLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Budget),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Upscale),
            4 => Ok(Self::Premium),
            other => Err(InvalidPriceLevel(other)),
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}
