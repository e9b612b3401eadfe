//! Produce categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted by [`Category::parse_filter`] meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// The fixed set of categories a listing can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetables,
    Fruits,
    Grains,
    Dairy,
    Herbs,
    Seeds,
}

impl Category {
    /// Every category, in filter-bar order.
    pub const ALL: [Category; 6] = [
        Category::Vegetables,
        Category::Fruits,
        Category::Grains,
        Category::Dairy,
        Category::Herbs,
        Category::Seeds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Grains => "grains",
            Category::Dairy => "dairy",
            Category::Herbs => "herbs",
            Category::Seeds => "seeds",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Grains => "Grains & Pulses",
            Category::Dairy => "Dairy",
            Category::Herbs => "Herbs & Spices",
            Category::Seeds => "Seeds",
        }
    }

    /// Parse a filter-bar value, where `"all"` (or an empty string) clears
    /// the filter.
    pub fn parse_filter(s: &str) -> Result<Option<Category>, CommerceError> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
