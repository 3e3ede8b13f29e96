//! Age ratings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

/// Discrete age rating, ordered `0+ < 6+ < 12+ < 16+ < 18+`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Rating {
    #[default]
    #[serde(rename = "0+")]
    ZeroPlus,
    #[serde(rename = "6+")]
    SixPlus,
    #[serde(rename = "12+")]
    TwelvePlus,
    #[serde(rename = "16+")]
    SixteenPlus,
    #[serde(rename = "18+")]
    EighteenPlus,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroPlus => "0+",
            Self::SixPlus => "6+",
            Self::TwelvePlus => "12+",
            Self::SixteenPlus => "16+",
            Self::EighteenPlus => "18+",
        }
    }

    /// Minimum viewer age.
    pub fn min_age(&self) -> u8 {
        match self {
            Self::ZeroPlus => 0,
            Self::SixPlus => 6,
            Self::TwelvePlus => 12,
            Self::SixteenPlus => 16,
            Self::EighteenPlus => 18,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0+" => Ok(Self::ZeroPlus),
            "6+" => Ok(Self::SixPlus),
            "12+" => Ok(Self::TwelvePlus),
            "16+" => Ok(Self::SixteenPlus),
            "18+" => Ok(Self::EighteenPlus),
            other => Err(format!("unknown rating '{}'", other)),
        }
    }
}
