//! Content categories scanned for by the rating engine.
//!
//! The set is closed: every score record carries one field per variant, and
//! the rating mapper matches on the fields directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

/// A problematic-content category.
///
/// # Serialization
///
/// Variants serialize to the snake_case tags used in catalogs, corrections and
/// JSON output (`violence`, `gore`, `sex_act`, `nudity`, `profanity`, `drugs`,
/// `child_risk`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Violence,
    Gore,
    SexAct,
    Nudity,
    Profanity,
    Drugs,
    ChildRisk,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 7] = [
        Category::Violence,
        Category::Gore,
        Category::SexAct,
        Category::Nudity,
        Category::Profanity,
        Category::Drugs,
        Category::ChildRisk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Violence => "violence",
            Self::Gore => "gore",
            Self::SexAct => "sex_act",
            Self::Nudity => "nudity",
            Self::Profanity => "profanity",
            Self::Drugs => "drugs",
            Self::ChildRisk => "child_risk",
        }
    }

    /// Critical categories use the steeper normalization curve.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Gore | Self::SexAct | Self::ChildRisk)
    }

    /// Categories describing something shown on screen. Matches for these in
    /// spoken dialogue are discounted as discussion rather than depiction.
    pub fn is_depiction(&self) -> bool {
        matches!(
            self,
            Self::Violence | Self::Gore | Self::SexAct | Self::Nudity | Self::Drugs
        )
    }

    /// Parents-guide section the category is reported under.
    pub fn guide_label(&self) -> &'static str {
        match self {
            Self::Violence | Self::Gore => "Violence & Gore",
            Self::SexAct | Self::Nudity => "Sex & Nudity",
            Self::Profanity => "Profanity",
            Self::Drugs => "Alcohol/Drugs/Smoking",
            Self::ChildRisk => "Frightening & Intense Scenes",
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_enum_iter() {
        let iterated: Vec<Category> = Category::iter().collect();
        assert_eq!(iterated, Category::ALL.to_vec());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::SexAct).unwrap();
        assert_eq!(json, r#""sex_act""#);
        let back: Category = serde_json::from_str(r#""child_risk""#).unwrap();
        assert_eq!(back, Category::ChildRisk);
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for category in Category::iter() {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert!("bloodshed".parse::<Category>().is_err());
    }

    #[test]
    fn test_critical_categories() {
        let critical: Vec<Category> = Category::iter().filter(|c| c.is_critical()).collect();
        assert_eq!(
            critical,
            vec![Category::Gore, Category::SexAct, Category::ChildRisk]
        );
    }
}
