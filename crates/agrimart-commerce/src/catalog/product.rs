//! Product listing type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A produce listing in the catalog snapshot.
///
/// Listings are immutable from the point of view of the browsing and cart
/// code; a new snapshot replaces the old one wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Listing title.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Current unit price.
    pub price: Money,
    /// Price before discount, shown struck through.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Average review score, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind `rating`.
    #[serde(default)]
    pub review_count: u32,
    /// Image reference (URL or asset path).
    #[serde(default)]
    pub image: String,
    /// Produce category.
    pub category: Category,
    /// Selling farm or vendor.
    #[serde(default)]
    pub vendor: String,
    /// Where the produce ships from.
    #[serde(default)]
    pub location: String,
    /// Units available.
    #[serde(default)]
    pub stock: u32,
    /// Recently listed.
    #[serde(default)]
    pub is_new: bool,
    /// Promoted by the marketplace.
    #[serde(default)]
    pub is_featured: bool,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount: u8,
    /// Tags for search and badges (e.g. "organic").
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Create a listing with the required fields; everything else defaults.
    pub fn new(id: u64, name: impl Into<String>, category: Category, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            rating: 0.0,
            review_count: 0,
            image: String::new(),
            category,
            vendor: String::new(),
            location: String::new(),
            stock: 0,
            is_new: false,
            is_featured: false,
            discount: 0,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.review_count = review_count;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>, location: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self.location = location.into();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = percent.min(100);
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Add a tag, ignoring duplicates.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Check if any units are available.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check for a tag, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Amount saved per unit relative to the original price.
    ///
    /// `None` when there is no original price or it is not above the
    /// current price.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .and_then(|original| original.try_subtract(&self.price))
            .filter(|saved| saved.amount_cents > 0)
    }
}
