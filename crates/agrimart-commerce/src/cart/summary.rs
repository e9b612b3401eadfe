//! Cart totals breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the cart drawer and checkout hand-off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub total_items: u64,
    /// Number of lines with at least one unit.
    pub distinct_items: usize,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Amount saved against original prices.
    pub savings: Money,
    /// Lines with at least one unit, in cart order.
    pub lines: Vec<LineSummary>,
}

impl CartSummary {
    /// Check if any savings apply.
    pub fn has_savings(&self) -> bool {
        self.savings.amount_cents > 0
    }

    /// Savings as a percentage of the pre-discount total.
    pub fn savings_percentage(&self) -> f64 {
        let before = self.subtotal.amount_cents + self.savings.amount_cents;
        if before == 0 {
            return 0.0;
        }
        (self.savings.amount_cents as f64 / before as f64) * 100.0
    }
}

/// One in-cart line of a [`CartSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub total: Money,
}
