//! Price bounds, the recompute pipeline, and facet counts.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::money::Money;
use crate::search::CatalogQuery;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds from the price slider.
///
/// Bounds compare by amount only; a catalog snapshot is single-currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Build a range without validation. An inverted range matches nothing.
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Build a range, rejecting `min > max`.
    pub fn new_checked(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min.amount_cents > max.amount_cents {
            return Err(CommerceError::InvalidPriceRange {
                min: min.display(),
                max: max.display(),
            });
        }
        Ok(Self::new(min, max))
    }

    /// A range that admits every non-negative price.
    pub fn any() -> Self {
        Self {
            min: Money::default(),
            max: Money::new(i64::MAX, Default::default()),
        }
    }

    /// The tightest range covering every listing, or `None` for an empty
    /// catalog.
    pub fn spanning(products: &[Product]) -> Option<Self> {
        let min = products.iter().map(|p| p.price).min_by_key(|m| m.amount_cents)?;
        let max = products.iter().map(|p| p.price).max_by_key(|m| m.amount_cents)?;
        Some(Self::new(min, max))
    }

    pub fn contains(&self, price: &Money) -> bool {
        self.min.amount_cents <= price.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::any()
    }
}

/// Derive the ordered, filtered view of `products` for `query`.
///
/// Category filter, then sort, then price filter. The sort is stable so
/// listings that tie under the policy keep their catalog order. The input
/// slice is never modified.
pub fn recompute(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| query.category.map_or(true, |c| p.category == c))
        .cloned()
        .collect();

    view.sort_by(|a, b| query.sort.compare(a, b));
    view.retain(|p| query.price_range.contains(&p.price));

    tracing::debug!(
        category = query.category.map(|c| c.as_str()).unwrap_or("all"),
        sort = %query.sort,
        candidates = products.len(),
        matched = view.len(),
        "recomputed catalog view"
    );

    view
}

/// Number of listings in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Per-category listing counts for the filter bar, in [`Category::ALL`]
/// order. Categories with no listings are omitted.
pub fn category_counts(products: &[Product]) -> Vec<CategoryCount> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: products.iter().filter(|p| p.category == category).count(),
        })
        .filter(|c| c.count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;
    use crate::search::SortKey;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn ids(view: &[Product]) -> Vec<u64> {
        view.iter().map(|p| p.id.get()).collect()
    }

    fn fixture() -> Vec<Product> {
        vec![
            Product::new(1, "Kale", Category::Vegetables, usd(300)).with_rating(4.1, 5).with_discount(10),
            Product::new(2, "Plums", Category::Fruits, usd(500)).featured().with_rating(4.9, 8),
            Product::new(3, "Oats", Category::Grains, usd(200)).new_arrival().with_discount(25),
            Product::new(4, "Leeks", Category::Vegetables, usd(300)).featured().new_arrival(),
            Product::new(5, "Figs", Category::Fruits, usd(800)).with_rating(4.9, 2).with_discount(25),
        ]
    }

    #[test]
    fn test_category_filter() {
        let query = CatalogQuery::new().with_category(Category::Vegetables);
        let view = recompute(&fixture(), &query);
        assert!(view.iter().all(|p| p.category == Category::Vegetables));
        assert_eq!(ids(&view), vec![4, 1]);
    }

    #[test]
    fn test_featured_is_stable_partition() {
        let view = recompute(&fixture(), &CatalogQuery::new());
        assert_eq!(ids(&view), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_newest_is_stable_partition() {
        let view = recompute(&fixture(), &CatalogQuery::new().with_sort(SortKey::Newest));
        assert_eq!(ids(&view), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn test_price_sorts() {
        let low = recompute(&fixture(), &CatalogQuery::new().with_sort(SortKey::PriceLow));
        assert_eq!(ids(&low), vec![3, 1, 4, 2, 5]);

        let high = recompute(&fixture(), &CatalogQuery::new().with_sort(SortKey::PriceHigh));
        assert_eq!(ids(&high), vec![5, 2, 1, 4, 3]);
    }

    #[test]
    fn test_rating_and_discount_sorts() {
        let rating = recompute(&fixture(), &CatalogQuery::new().with_sort(SortKey::Rating));
        assert_eq!(ids(&rating), vec![2, 5, 1, 3, 4]);

        let discount = recompute(&fixture(), &CatalogQuery::new().with_sort(SortKey::Discount));
        assert_eq!(ids(&discount), vec![3, 5, 1, 2, 4]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let query = CatalogQuery::new()
            .with_sort(SortKey::PriceLow)
            .with_price_range(PriceRange::new(usd(200), usd(300)));
        assert_eq!(ids(&recompute(&fixture(), &query)), vec![3, 1, 4]);
    }

    #[test]
    fn test_out_of_range_yields_empty() {
        let query = CatalogQuery::new().with_price_range(PriceRange::new(usd(900), usd(100)));
        assert!(recompute(&fixture(), &query).is_empty());
    }

    #[test]
    fn test_source_not_mutated() {
        let products = fixture();
        let before = products.clone();
        let _ = recompute(&products, &CatalogQuery::new().with_sort(SortKey::PriceHigh));
        assert_eq!(products, before);
    }

    #[test]
    fn test_new_checked_rejects_inverted() {
        assert!(PriceRange::new_checked(usd(500), usd(100)).is_err());
        assert!(PriceRange::new_checked(usd(100), usd(100)).is_ok());
    }

    #[test]
    fn test_spanning() {
        let range = PriceRange::spanning(&fixture()).unwrap();
        assert_eq!(range.min, usd(200));
        assert_eq!(range.max, usd(800));
        assert!(PriceRange::spanning(&[]).is_none());
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(&fixture());
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: Category::Vegetables, count: 2 },
                CategoryCount { category: Category::Fruits, count: 2 },
                CategoryCount { category: Category::Grains, count: 1 },
            ]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                (arb_category(), 0i64..2_000, 0u8..=100, any::<bool>(), any::<bool>(), 0u32..=50),
                0..30,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (category, cents, discount, is_new, is_featured, tenths))| {
                        let mut p = Product::new(i as u64, format!("item-{i}"), category, usd(cents))
                            .with_discount(discount)
                            .with_rating(f64::from(tenths) / 10.0, 1);
                        p.is_new = is_new;
                        p.is_featured = is_featured;
                        p
                    })
                    .collect()
            })
        }

        fn arb_sort() -> impl Strategy<Value = SortKey> {
            prop::sample::select(SortKey::ALL.to_vec())
        }

        proptest! {
            /// Property: the category filter keeps exactly the matching listings.
            #[test]
            fn category_filter_is_exact(products in arb_products(), category in arb_category(), sort in arb_sort()) {
                let query = CatalogQuery::new().with_category(category).with_sort(sort);
                let view = recompute(&products, &query);

                prop_assert!(view.iter().all(|p| p.category == category));

                let mut got: Vec<ProductId> = view.iter().map(|p| p.id).collect();
                let mut want: Vec<ProductId> = products.iter().filter(|p| p.category == category).map(|p| p.id).collect();
                got.sort();
                want.sort();
                prop_assert_eq!(got, want);
            }

            /// Property: price sorts are monotonic.
            #[test]
            fn price_sorts_are_monotonic(products in arb_products()) {
                let low = recompute(&products, &CatalogQuery::new().with_sort(SortKey::PriceLow));
                prop_assert!(low.windows(2).all(|w| w[0].price.amount_cents <= w[1].price.amount_cents));

                let high = recompute(&products, &CatalogQuery::new().with_sort(SortKey::PriceHigh));
                prop_assert!(high.windows(2).all(|w| w[0].price.amount_cents >= w[1].price.amount_cents));
            }

            /// Property: bucket sorts put matches first and keep input order within buckets.
            #[test]
            fn bucket_sorts_are_stable(products in arb_products(), newest in any::<bool>()) {
                let sort = if newest { SortKey::Newest } else { SortKey::Featured };
                let flag = |p: &Product| if newest { p.is_new } else { p.is_featured };
                let view = recompute(&products, &CatalogQuery::new().with_sort(sort));

                let expected: Vec<ProductId> = products.iter().filter(|p| flag(*p))
                    .chain(products.iter().filter(|p| !flag(*p)))
                    .map(|p| p.id)
                    .collect();
                let got: Vec<ProductId> = view.iter().map(|p| p.id).collect();
                prop_assert_eq!(got, expected);
            }

            /// Property: every listing in the view lies within the price range.
            #[test]
            fn price_range_bounds_hold(products in arb_products(), a in 0i64..2_000, b in 0i64..2_000) {
                let range = PriceRange::new(usd(a.min(b)), usd(a.max(b)));
                let view = recompute(&products, &CatalogQuery::new().with_price_range(range));
                prop_assert!(view.iter().all(|p| range.contains(&p.price)));
                prop_assert_eq!(view.len(), products.iter().filter(|p| range.contains(&p.price)).count());
            }
        }
    }
}
