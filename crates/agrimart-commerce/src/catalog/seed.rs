//! Built-in sample catalog.
//!
//! Stands in for a live catalog service in demos and tests.

use crate::catalog::{Catalog, Category, Product};
use crate::money::{Currency, Money};

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

/// The farm-produce catalog shipped with the marketplace storefront.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(1, "Organic Heirloom Tomatoes", Category::Vegetables, usd(499))
            .with_description("Vine-ripened mixed heirloom varieties, picked to order.")
            .with_original_price(usd(599))
            .with_discount(17)
            .with_rating(4.8, 124)
            .with_image("/images/products/tomatoes.jpg")
            .with_vendor("Green Valley Farm", "Salinas, CA")
            .with_stock(150)
            .featured()
            .with_tag("organic")
            .with_tag("seasonal"),
        Product::new(2, "Fresh Strawberries", Category::Fruits, usd(699))
            .with_description("Sweet field strawberries in 1 lb clamshells.")
            .with_rating(4.9, 89)
            .with_image("/images/products/strawberries.jpg")
            .with_vendor("Berry Hill Orchards", "Watsonville, CA")
            .with_stock(80)
            .featured()
            .new_arrival()
            .with_tag("seasonal"),
        Product::new(3, "Stone-Ground Whole Wheat Flour", Category::Grains, usd(849))
            .with_description("Hard red winter wheat, milled weekly. 5 lb bag.")
            .with_original_price(usd(999))
            .with_discount(15)
            .with_rating(4.6, 56)
            .with_image("/images/products/flour.jpg")
            .with_vendor("Prairie Mill Co-op", "Salina, KS")
            .with_stock(200)
            .with_tag("stone-ground"),
        Product::new(4, "Farm Fresh Eggs", Category::Dairy, usd(599))
            .with_description("Pasture-raised brown eggs, one dozen.")
            .with_rating(4.7, 210)
            .with_image("/images/products/eggs.jpg")
            .with_vendor("Sunrise Poultry", "Petaluma, CA")
            .with_stock(60)
            .featured()
            .with_tag("pasture-raised"),
        Product::new(5, "Sweet Basil Bunch", Category::Herbs, usd(299))
            .with_description("Genovese basil, cut the morning of shipping.")
            .with_rating(4.5, 41)
            .with_image("/images/products/basil.jpg")
            .with_vendor("Green Valley Farm", "Salinas, CA")
            .with_stock(120)
            .new_arrival()
            .with_tag("organic"),
        Product::new(6, "Rainbow Carrots", Category::Vegetables, usd(349))
            .with_description("Purple, yellow and orange carrots, 2 lb bunch.")
            .with_original_price(usd(449))
            .with_discount(22)
            .with_rating(4.4, 67)
            .with_image("/images/products/carrots.jpg")
            .with_vendor("Riverbend Gardens", "Eugene, OR")
            .with_stock(95)
            .with_tag("organic"),
        Product::new(7, "Honeycrisp Apples", Category::Fruits, usd(549))
            .with_description("Crisp late-season apples, 3 lb bag.")
            .with_rating(4.8, 143)
            .with_image("/images/products/apples.jpg")
            .with_vendor("Cascade Orchards", "Wenatchee, WA")
            .with_stock(0)
            .with_tag("seasonal"),
        Product::new(8, "Heritage Brown Rice", Category::Grains, usd(749))
            .with_description("Short-grain brown rice, 4 lb bag.")
            .with_rating(4.3, 38)
            .with_image("/images/products/rice.jpg")
            .with_vendor("Delta Grain Growers", "Stuttgart, AR")
            .with_stock(175)
            .new_arrival(),
        Product::new(9, "Raw Wildflower Honey", Category::Dairy, usd(1299))
            .with_description("Unfiltered honey from hives on our own pasture.")
            .with_original_price(usd(1499))
            .with_discount(13)
            .with_rating(4.9, 98)
            .with_image("/images/products/honey.jpg")
            .with_vendor("Sunrise Poultry", "Petaluma, CA")
            .with_stock(40)
            .featured()
            .with_tag("raw"),
        Product::new(10, "Fresh Mint", Category::Herbs, usd(249))
            .with_description("Spearmint bunch, great for teas.")
            .with_rating(4.2, 22)
            .with_image("/images/products/mint.jpg")
            .with_vendor("Riverbend Gardens", "Eugene, OR")
            .with_stock(90),
        Product::new(11, "Heirloom Seed Starter Kit", Category::Seeds, usd(1999))
            .with_description("Twelve open-pollinated vegetable varieties.")
            .with_original_price(usd(2499))
            .with_discount(20)
            .with_rating(4.7, 73)
            .with_image("/images/products/seed-kit.jpg")
            .with_vendor("Prairie Mill Co-op", "Salina, KS")
            .with_stock(35)
            .new_arrival()
            .with_tag("heirloom"),
        Product::new(12, "Baby Spinach", Category::Vegetables, usd(399))
            .with_description("Tender baby spinach, 10 oz tub.")
            .with_rating(4.5, 112)
            .with_image("/images/products/spinach.jpg")
            .with_vendor("Green Valley Farm", "Salinas, CA")
            .with_stock(110)
            .with_tag("organic"),
    ])
}
