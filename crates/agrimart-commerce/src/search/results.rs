//! Browsing controller with "load more" pagination.

use crate::catalog::{Category, Product};
use crate::search::{recompute, CatalogQuery, PriceRange, SortKey};
use serde::{Deserialize, Serialize};

/// Listings shown before the first "load more".
pub const DEFAULT_INITIAL_DISPLAY: usize = 4;

/// Listings added by each "load more".
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Pagination settings for the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseSettings {
    /// Listings shown before the first "load more".
    #[serde(default = "default_initial_display")]
    pub initial_display: usize,
    /// Listings added by each "load more".
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_initial_display() -> usize {
    DEFAULT_INITIAL_DISPLAY
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            initial_display: DEFAULT_INITIAL_DISPLAY,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Owns a catalog snapshot plus the browsing state derived from it.
///
/// Every input change re-runs [`recompute`] from scratch. The display
/// cursor is not reset by input changes; it only grows through
/// [`CatalogBrowser::load_more`].
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    products: Vec<Product>,
    query: CatalogQuery,
    visible: Vec<Product>,
    display_count: usize,
    settings: BrowseSettings,
}

impl CatalogBrowser {
    /// Create a browser over `products` with an unfiltered query.
    pub fn new(products: Vec<Product>, settings: BrowseSettings) -> Self {
        Self::with_query(products, CatalogQuery::new(), settings)
    }

    /// Create a browser with an initial query.
    pub fn with_query(products: Vec<Product>, query: CatalogQuery, settings: BrowseSettings) -> Self {
        let visible = recompute(&products, &query);
        Self {
            products,
            query,
            visible,
            display_count: settings.initial_display,
            settings,
        }
    }

    /// Replace the catalog snapshot (e.g. after a re-fetch).
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refresh();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.query.category = category;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.refresh();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.query.price_range = range;
        self.refresh();
    }

    /// Replace every criterion at once.
    pub fn set_query(&mut self, query: CatalogQuery) {
        self.query = query;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = recompute(&self.products, &self.query);
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn settings(&self) -> BrowseSettings {
        self.settings
    }

    /// The full filtered and sorted sequence, before pagination.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Number of listings currently exposed to the grid.
    ///
    /// Never exceeds the length of the visible sequence.
    pub fn display_count(&self) -> usize {
        self.display_count.min(self.visible.len())
    }

    /// The listings the grid renders right now.
    pub fn displayed(&self) -> &[Product] {
        &self.visible[..self.display_count()]
    }

    /// Whether a "load more" would reveal anything.
    pub fn has_more(&self) -> bool {
        self.display_count() < self.visible.len()
    }

    /// Reveal the next page, saturating at the visible length.
    ///
    /// Returns the new display count.
    pub fn load_more(&mut self) -> usize {
        let shown = self.display_count();
        let next = shown
            .saturating_add(self.settings.page_size)
            .min(self.visible.len());
        // A short filtered list must not pull the cursor below where it was.
        self.display_count = self.display_count.max(next);

        tracing::debug!(
            from = shown,
            to = self.display_count(),
            total = self.visible.len(),
            "loaded more listings"
        );

        self.display_count()
    }
}
