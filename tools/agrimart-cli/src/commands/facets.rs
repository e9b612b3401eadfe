//! Filter-bar facets command.

use agrimart_commerce::catalog::Category;
use agrimart_commerce::search::{category_counts, CategoryCount, PriceRange};
use anyhow::Result;
use serde::Serialize;

use super::FacetsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct FacetsReport {
    total: usize,
    categories: Vec<CategoryCount>,
    price_range: Option<PriceRange>,
}

/// Run the facets command.
pub fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let category = match &args.category {
        Some(c) => Category::parse_filter(c)?,
        None => None,
    };

    let in_scope: Vec<_> = catalog
        .products()
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .cloned()
        .collect();

    let report = FacetsReport {
        total: catalog.len(),
        categories: category_counts(catalog.products()),
        price_range: PriceRange::spanning(&in_scope),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output.kv("All", &report.total.to_string());
    for count in &report.categories {
        ctx.output
            .kv(count.category.display_name(), &count.count.to_string());
    }

    ctx.output.header("Price");
    match report.price_range {
        Some(range) => {
            ctx.output.kv("min", &range.min.display());
            ctx.output.kv("max", &range.max.display());
        }
        None => ctx.output.info("No listings in scope."),
    }

    Ok(())
}
