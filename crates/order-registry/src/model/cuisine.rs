//! Cuisine classification for dishes.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The set of cuisines an order can be tagged with.
///
/// Labels are uppercase and fixed. [`CuisineType::ALL`] lists every variant
/// in the order reports are printed in; anything outside the first six named
/// cuisines is tagged [`CuisineType::Other`] by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CuisineType {
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
    French,
    Other,
}

/// Error returned when a string matches none of the cuisine labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cuisine label: {0}")]
pub struct ParseCuisineError(pub String);

impl CuisineType {
    /// Every cuisine, in report order.
    pub const ALL: [CuisineType; 7] = [
        CuisineType::Italian,
        CuisineType::Mexican,
        CuisineType::Chinese,
        CuisineType::Indian,
        CuisineType::American,
        CuisineType::French,
        CuisineType::Other,
    ];

    /// The canonical uppercase label for this cuisine.
    pub const fn label(self) -> &'static str {
        match self {
            CuisineType::Italian => "ITALIAN",
            CuisineType::Mexican => "MEXICAN",
            CuisineType::Chinese => "CHINESE",
            CuisineType::Indian => "INDIAN",
            CuisineType::American => "AMERICAN",
            CuisineType::French => "FRENCH",
            CuisineType::Other => "OTHER",
        }
    }
}

impl Display for CuisineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CuisineType {
    type Err = ParseCuisineError;

    /// Parses a canonical label back into its cuisine.
    ///
    /// Matching is exact. Lowercase or otherwise unknown names are errors
    /// rather than [`CuisineType::Other`], which must be spelled `"OTHER"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CuisineType::ALL
            .into_iter()
            .find(|cuisine| cuisine.label() == s)
            .ok_or_else(|| ParseCuisineError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for cuisine in CuisineType::ALL {
            assert_eq!(cuisine.label().parse::<CuisineType>(), Ok(cuisine));
        }
    }

    #[test]
    fn test_unknown_labels_do_not_parse() {
        assert!("SPANISH".parse::<CuisineType>().is_err());
        assert!(
            "italian".parse::<CuisineType>().is_err(),
            "matching is case sensitive"
        );
        assert!("".parse::<CuisineType>().is_err());
    }

    #[test]
    fn test_report_order_is_stable() {
        let labels: Vec<&str> = CuisineType::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["ITALIAN", "MEXICAN", "CHINESE", "INDIAN", "AMERICAN", "FRENCH", "OTHER"]
        );
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(CuisineType::French.to_string(), "FRENCH");
        assert_eq!(CuisineType::Other.to_string(), "OTHER");
    }
}
