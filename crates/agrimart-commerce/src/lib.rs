//! Catalog browsing and cart aggregation for the AgriMart farm marketplace.
//!
//! This crate holds the client-side logic behind the storefront grid and
//! the cart drawer:
//!
//! - **Catalog**: produce listings, categories, snapshot loading
//! - **Search**: category filter, sort policies, price bounds, "load more"
//! - **Cart**: per-product quantities, totals, change notifications
//!
//! Everything is synchronous and in-memory. The catalog snapshot is owned
//! by the caller and never modified here.
//!
//! # Example
//!
//! ```rust
//! use agrimart_commerce::prelude::*;
//!
//! let catalog = sample_catalog();
//!
//! let mut browser = CatalogBrowser::new(catalog.products().to_vec(), BrowseSettings::default());
//! browser.set_sort(SortKey::PriceLow);
//! browser.load_more();
//! assert_eq!(browser.displayed().len(), 8);
//!
//! let mut cart = CartAggregator::from_products(catalog.products())
//!     .with_observer(|event: &CartEvent| println!("{}", event.message()));
//! cart.add_to_cart(ProductId::new(1)).unwrap();
//! cart.set_quantity(ProductId::new(1), QuantityChange::Increment).unwrap();
//! assert_eq!(cart.total_items(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{sample_catalog, Catalog, Category, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartAggregator, CartEvent, CartLine, CartObserver, CartSummary, LogObserver,
        QuantityChange,
    };

    // Search
    pub use crate::search::{
        category_counts, recompute, BrowseSettings, CatalogBrowser, CatalogQuery, PriceRange,
        SortKey,
    };
}
