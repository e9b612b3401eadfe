//! Catalog browsing command.

use agrimart_commerce::catalog::{Category, Product};
use agrimart_commerce::search::{CatalogBrowser, CatalogQuery, PriceRange, SortKey};
use agrimart_commerce::Money;
use anyhow::{Context as _, Result};
use serde::Serialize;

use super::BrowseArgs;
use crate::config::CliConfig;
use crate::context::Context;
use crate::output::{format_rating, listing_badges};

const WIDTHS: [usize; 5] = [4, 30, 12, 9, 11];

#[derive(Serialize)]
struct BrowseReport<'a> {
    query: &'a CatalogQuery,
    total: usize,
    display_count: usize,
    has_more: bool,
    products: &'a [Product],
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let query = build_query(&args, &ctx.config)?;

    if query.price_range.min.amount_cents > query.price_range.max.amount_cents {
        ctx.output.warn("--min is above --max; no listings can match");
    }

    let mut browser =
        CatalogBrowser::with_query(catalog.into_products(), query, ctx.config.browse.settings);

    for _ in 0..args.more {
        if !browser.has_more() {
            ctx.output.debug("nothing more to load");
            break;
        }
        browser.load_more();
    }

    if ctx.output.is_json() {
        ctx.output.json(&BrowseReport {
            query: browser.query(),
            total: browser.visible().len(),
            display_count: browser.display_count(),
            has_more: browser.has_more(),
            products: browser.displayed(),
        });
        return Ok(());
    }

    let category = browser
        .query()
        .category
        .map(|c| c.display_name())
        .unwrap_or("All categories");
    ctx.output.header(&format!(
        "{} \u{b7} {}",
        category,
        browser.query().sort.display_name()
    ));

    if browser.visible().is_empty() {
        ctx.output.info("No listings match these filters.");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "Name", "Category", "Price", "Rating"], &WIDTHS);
    for product in browser.displayed() {
        print_listing(ctx, product);
    }

    ctx.output.info(&format!(
        "Showing {} of {} listings",
        browser.display_count(),
        browser.visible().len()
    ));
    if browser.has_more() {
        ctx.output
            .info(&format!("Use --more {} to load more", args.more + 1));
    }

    Ok(())
}

fn print_listing(ctx: &Context, product: &Product) {
    let id = product.id.to_string();
    let price = product.price.display();
    let rating = format_rating(product.rating);
    ctx.output.table_row(
        &[
            id.as_str(),
            product.name.as_str(),
            product.category.as_str(),
            price.as_str(),
            rating.as_str(),
        ],
        &WIDTHS,
    );

    let badges = listing_badges(product.is_featured, product.is_new, product.discount);
    if !badges.is_empty() {
        ctx.output.list_item(&badges);
    }
}

/// Translate command-line criteria into a query, falling back to the
/// configured default sort.
fn build_query(args: &BrowseArgs, config: &CliConfig) -> Result<CatalogQuery> {
    let category: Option<Category> = Category::parse_filter(&args.category)?;

    let sort = match &args.sort {
        Some(sort) => sort.parse::<SortKey>().context("Invalid --sort")?,
        None => config.browse.default_sort,
    };

    let currency = config.catalog.currency;
    let any = PriceRange::any();
    let range = PriceRange::new(
        args.min
            .map(|m| Money::from_decimal(m, currency))
            .unwrap_or(any.min),
        args.max
            .map(|m| Money::from_decimal(m, currency))
            .unwrap_or(any.max),
    );

    Ok(CatalogQuery::new()
        .with_category(category)
        .with_sort(sort)
        .with_price_range(range))
}
