//! Catalog browsing module.
//!
//! Contains the filter/sort engine, facet counts, and the paginated
//! browsing controller.

mod query;
mod filter;
mod results;

pub use query::{CatalogQuery, SortKey};
pub use filter::{category_counts, recompute, CategoryCount, PriceRange};
pub use results::{BrowseSettings, CatalogBrowser, DEFAULT_INITIAL_DISPLAY, DEFAULT_PAGE_SIZE};
