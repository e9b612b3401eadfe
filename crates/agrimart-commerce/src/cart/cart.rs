//! Cart and cart line types.

use crate::cart::{CartEvent, CartSummary, LineSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// Direction of a quantity button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityChange {
    Increment,
    Decrement,
}

impl QuantityChange {
    /// Map the `increment: bool` flag used by quantity buttons.
    pub fn from_increment(increment: bool) -> Self {
        if increment {
            QuantityChange::Increment
        } else {
            QuantityChange::Decrement
        }
    }
}

/// Per-product quantity record.
///
/// `in_cart` is kept equal to `quantity > 0` by every mutation. It is
/// rederived from `quantity` when a line is deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "StoredCartLine")]
pub struct CartLine {
    product_id: ProductId,
    product_name: String,
    unit_price: Money,
    original_price: Option<Money>,
    quantity: u32,
    in_cart: bool,
}

impl CartLine {
    /// A zero-quantity line for `product`.
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price: product.price,
            original_price: product.original_price,
            quantity: 0,
            in_cart: false,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn original_price(&self) -> Option<Money> {
        self.original_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn in_cart(&self) -> bool {
        self.in_cart
    }

    /// `unit_price * quantity`, or `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(i64::from(self.quantity))
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.in_cart = quantity > 0;
    }
}

/// Serialized form of a [`CartLine`]; any stored `in_cart` flag is ignored.
#[derive(Deserialize)]
struct StoredCartLine {
    product_id: ProductId,
    product_name: String,
    unit_price: Money,
    original_price: Option<Money>,
    quantity: u32,
}

impl From<StoredCartLine> for CartLine {
    fn from(stored: StoredCartLine) -> Self {
        Self {
            product_id: stored.product_id,
            product_name: stored.product_name,
            unit_price: stored.unit_price,
            original_price: stored.original_price,
            quantity: stored.quantity,
            in_cart: stored.quantity > 0,
        }
    }
}

/// Shopping cart state for one browsing session.
///
/// Lines are created up front from the catalog and never removed; an
/// emptied line stays behind with quantity zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Create a cart with a zero-quantity line for every product.
    ///
    /// The currency is taken from the first product.
    pub fn from_products(products: &[Product]) -> Self {
        let currency = products.first().map(|p| p.price.currency).unwrap_or_default();
        let mut cart = Self::new(currency);
        for product in products {
            cart.track(product);
        }
        cart
    }

    /// Register a zero-quantity line for `product`.
    ///
    /// Returns false if the product was already tracked.
    pub fn track(&mut self, product: &Product) -> bool {
        if self.line(product.id).is_some() {
            return false;
        }
        self.lines.push(CartLine::for_product(product));
        true
    }

    fn line_mut(&mut self, product_id: ProductId) -> Result<&mut CartLine, CommerceError> {
        self.lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))
    }

    /// Apply a quantity button press.
    ///
    /// Decrement clamps at zero. Fails without changing anything if the
    /// product is not tracked or an increment would pass
    /// [`MAX_QUANTITY_PER_LINE`]. That ceiling is the only case where an
    /// increment on a tracked line does not add one unit.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        change: QuantityChange,
    ) -> Result<CartEvent, CommerceError> {
        let line = self.line_mut(product_id)?;
        let quantity = match change {
            QuantityChange::Increment => {
                let next = line.quantity.saturating_add(1);
                if next > MAX_QUANTITY_PER_LINE {
                    return Err(CommerceError::QuantityExceedsLimit(next, MAX_QUANTITY_PER_LINE));
                }
                next
            }
            QuantityChange::Decrement => line.quantity.saturating_sub(1),
        };
        line.set_quantity(quantity);

        tracing::debug!(product_id = %product_id, ?change, quantity, "cart quantity changed");

        Ok(if quantity == 0 {
            CartEvent::Emptied { product_id }
        } else {
            CartEvent::QuantityChanged { product_id, quantity }
        })
    }

    /// Ensure the product is in the cart with at least one unit.
    ///
    /// A line that already has units is left unchanged.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<CartEvent, CommerceError> {
        let line = self.line_mut(product_id)?;
        if line.quantity == 0 {
            line.set_quantity(1);
        }

        tracing::debug!(product_id = %product_id, quantity = line.quantity, "added to cart");

        Ok(CartEvent::Added {
            product_id,
            product_name: line.product_name.clone(),
            quantity: line.quantity,
        })
    }

    /// Set every quantity back to zero. Lines are kept.
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.set_quantity(0);
        }
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Every tracked line, including zero-quantity ones.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Lines with at least one unit.
    pub fn in_cart_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|l| l.in_cart)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check if no line has any units.
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity` across lines with at least one unit.
    ///
    /// Zero-quantity lines contribute nothing, whatever their currency.
    pub fn total_value(&self) -> Result<Money, CommerceError> {
        let totals = self
            .in_cart_lines()
            .map(|l| l.line_total().ok_or(CommerceError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;

        Money::try_sum(totals.iter(), self.currency).ok_or_else(|| {
            match totals.iter().find(|m| m.currency != self.currency) {
                Some(other) => CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: other.currency.code().to_string(),
                },
                None => CommerceError::Overflow,
            }
        })
    }

    /// Totals and per-line breakdown for the cart drawer and checkout.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        let mut savings = Money::zero(self.currency);
        let mut lines = Vec::new();

        for line in self.in_cart_lines() {
            let total = line.line_total().ok_or(CommerceError::Overflow)?;
            let saved = line
                .original_price
                .and_then(|original| original.try_subtract(&line.unit_price))
                .filter(|per_unit| per_unit.amount_cents > 0)
                .map(|per_unit| per_unit.try_multiply(i64::from(line.quantity)).ok_or(CommerceError::Overflow))
                .transpose()?;
            if let Some(saved) = saved {
                savings = savings.try_add(&saved).ok_or(CommerceError::Overflow)?;
            }

            lines.push(LineSummary {
                product_id: line.product_id,
                product_name: line.product_name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                total,
            });
        }

        Ok(CartSummary {
            total_items: self.total_items(),
            distinct_items: lines.len(),
            subtotal: self.total_value()?,
            savings,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn cart() -> Cart {
        Cart::from_products(&[
            Product::new(1, "Apples", Category::Fruits, usd(1000)),
            Product::new(2, "Kale", Category::Vegetables, usd(500)).with_original_price(usd(700)),
        ])
    }

    fn id(n: u64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_cart_starts_with_zero_lines() {
        let cart = cart();
        assert_eq!(cart.lines().len(), 2);
        assert!(cart.is_empty());
        assert!(cart.lines().iter().all(|l| l.quantity() == 0 && !l.in_cart()));
    }

    #[test]
    fn test_increment_twice() {
        let mut cart = cart();
        cart.set_quantity(id(1), QuantityChange::Increment).unwrap();
        let event = cart.set_quantity(id(1), QuantityChange::Increment).unwrap();

        assert_eq!(event, CartEvent::QuantityChanged { product_id: id(1), quantity: 2 });
        let line = cart.line(id(1)).unwrap();
        assert_eq!(line.quantity(), 2);
        assert!(line.in_cart());
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut cart = cart();
        let event = cart.set_quantity(id(1), QuantityChange::Decrement).unwrap();
        assert_eq!(event, CartEvent::Emptied { product_id: id(1) });
        assert_eq!(cart.line(id(1)).unwrap().quantity(), 0);
        assert!(!cart.line(id(1)).unwrap().in_cart());
    }

    #[test]
    fn test_emptied_line_persists() {
        let mut cart = cart();
        cart.add_to_cart(id(2)).unwrap();
        cart.set_quantity(id(2), QuantityChange::Decrement).unwrap();
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.in_cart_lines().count(), 0);
    }

    #[test]
    fn test_add_to_cart_is_idempotent() {
        let mut cart = cart();
        cart.add_to_cart(id(1)).unwrap();
        assert_eq!(cart.line(id(1)).unwrap().quantity(), 1);

        cart.set_quantity(id(1), QuantityChange::Increment).unwrap();
        let event = cart.add_to_cart(id(1)).unwrap();
        assert_eq!(
            event,
            CartEvent::Added { product_id: id(1), product_name: "Apples".to_string(), quantity: 2 }
        );
        assert_eq!(cart.line(id(1)).unwrap().quantity(), 2);
    }

    #[test]
    fn test_unknown_product() {
        let mut cart = cart();
        let before = cart.clone();
        assert_eq!(
            cart.set_quantity(id(99), QuantityChange::Increment),
            Err(CommerceError::ProductNotFound(id(99)))
        );
        assert_eq!(cart.add_to_cart(id(99)), Err(CommerceError::ProductNotFound(id(99))));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = cart();
        for _ in 0..MAX_QUANTITY_PER_LINE {
            cart.set_quantity(id(2), QuantityChange::Increment).unwrap();
        }
        let result = cart.set_quantity(id(2), QuantityChange::Increment);
        assert_eq!(
            result,
            Err(CommerceError::QuantityExceedsLimit(MAX_QUANTITY_PER_LINE + 1, MAX_QUANTITY_PER_LINE))
        );
        assert_eq!(cart.line(id(2)).unwrap().quantity(), MAX_QUANTITY_PER_LINE);
    }

    #[test]
    fn test_totals() {
        let mut cart = cart();
        cart.add_to_cart(id(1)).unwrap();
        cart.add_to_cart(id(2)).unwrap();
        cart.set_quantity(id(2), QuantityChange::Increment).unwrap();

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_value().unwrap(), usd(2000)); // 1*1000 + 2*500
    }

    #[test]
    fn test_summary_savings() {
        let mut cart = cart();
        cart.add_to_cart(id(1)).unwrap();
        cart.add_to_cart(id(2)).unwrap();
        cart.set_quantity(id(2), QuantityChange::Increment).unwrap();

        let summary = cart.summary().unwrap();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.distinct_items, 2);
        assert_eq!(summary.subtotal, usd(2000));
        assert_eq!(summary.savings, usd(400)); // (700 - 500) * 2
        assert_eq!(summary.lines[1].total, usd(1000));
    }

    #[test]
    fn test_clear_keeps_lines() {
        let mut cart = cart();
        cart.add_to_cart(id(1)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total_value().unwrap(), usd(0));
    }

    #[test]
    fn test_track_new_product() {
        let mut cart = cart();
        let beans = Product::new(3, "Beans", Category::Seeds, usd(250));
        assert!(cart.track(&beans));
        assert!(!cart.track(&beans));
        assert!(cart.add_to_cart(id(3)).is_ok());
    }

    #[test]
    fn test_total_value_rejects_mixed_currency() {
        let mut cart = Cart::from_products(&[
            Product::new(1, "Apples", Category::Fruits, usd(1000)),
            Product::new(2, "Rice", Category::Grains, Money::new(900, Currency::INR)),
        ]);
        cart.add_to_cart(id(2)).unwrap();
        assert!(matches!(cart.total_value(), Err(CommerceError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_zero_lines_ignore_currency() {
        let mut cart = Cart::from_products(&[
            Product::new(1, "Apples", Category::Fruits, usd(1000)),
            Product::new(2, "Rice", Category::Grains, Money::new(900, Currency::INR)),
        ]);
        assert_eq!(cart.total_value().unwrap(), usd(0));

        cart.add_to_cart(id(1)).unwrap();
        assert_eq!(cart.total_value().unwrap(), usd(1000));
        assert_eq!(cart.summary().unwrap().subtotal, usd(1000));
    }

    #[test]
    fn test_deserialized_line_derives_in_cart() {
        let json = r#"{
            "product_id": 7,
            "product_name": "Apples",
            "unit_price": { "amount_cents": 549, "currency": "USD" },
            "original_price": null,
            "quantity": 0,
            "in_cart": true
        }"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.quantity(), 0);
        assert!(!line.in_cart());

        let mut cart = cart();
        cart.add_to_cart(id(2)).unwrap();
        let restored: Cart = serde_json::from_str(&serde_json::to_string(&cart).unwrap()).unwrap();
        assert_eq!(restored, cart);
        assert!(restored.line(id(2)).unwrap().in_cart());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: quantities never go negative and in_cart tracks quantity.
            #[test]
            fn quantity_invariants_hold(ops in prop::collection::vec((1u64..=3, any::<bool>(), any::<bool>()), 0..60)) {
                let mut cart = Cart::from_products(&[
                    Product::new(1, "Apples", Category::Fruits, usd(125)),
                    Product::new(2, "Kale", Category::Vegetables, usd(399)),
                    Product::new(3, "Oats", Category::Grains, usd(50)),
                ]);

                for (n, add, increment) in ops {
                    if add {
                        cart.add_to_cart(id(n)).unwrap();
                    } else {
                        cart.set_quantity(id(n), QuantityChange::from_increment(increment)).unwrap();
                    }
                    for line in cart.lines() {
                        prop_assert_eq!(line.in_cart(), line.quantity() > 0);
                    }
                }

                let items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity())).sum();
                prop_assert_eq!(cart.total_items(), items);

                let value: i64 = cart.lines().iter()
                    .map(|l| l.unit_price().amount_cents * i64::from(l.quantity()))
                    .sum();
                prop_assert_eq!(cart.total_value().unwrap().amount_cents, value);
            }
        }
    }
}
