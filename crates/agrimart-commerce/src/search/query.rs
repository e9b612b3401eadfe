//! Catalog query and sort policies.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::search::PriceRange;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort policies offered by the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured listings first.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by highest rated.
    Rating,
    /// Sort by largest discount.
    Discount,
    /// New arrivals first.
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Discount,
        SortKey::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Discount => "discount",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Discount => "Biggest Discount",
            SortKey::Newest => "Newest Arrivals",
        }
    }

    /// Ordering between two listings under this policy.
    ///
    /// `Featured` and `Newest` only split listings into two buckets, so
    /// equal-bucket listings compare `Equal` and a stable sort keeps their
    /// input order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Featured => b.is_featured.cmp(&a.is_featured),
            SortKey::PriceLow => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::PriceHigh => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Discount => b.discount.cmp(&a.discount),
            SortKey::Newest => b.is_new.cmp(&a.is_new),
        }
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-selected browsing criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Category filter; `None` shows every category.
    pub category: Option<Category>,
    /// Sort policy.
    pub sort: SortKey,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
}

impl CatalogQuery {
    /// Unfiltered query with the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<Option<Category>>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }
}
