//! Cart command: replay add/increment/decrement operations against the catalog.

use std::fmt;
use std::str::FromStr;

use agrimart_commerce::cart::{CartAggregator, CartEvent, LogObserver, QuantityChange};
use agrimart_commerce::{CommerceError, ProductId};
use anyhow::Result;

use super::CartArgs;
use crate::context::Context;

/// A single cart operation, written `add=ID`, `inc=ID` or `dec=ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Inc(ProductId),
    Dec(ProductId),
}

impl CartOp {
    fn apply(&self, cart: &mut CartAggregator) -> Result<CartEvent, CommerceError> {
        match *self {
            CartOp::Add(id) => cart.add_to_cart(id),
            CartOp::Inc(id) => cart.set_quantity(id, QuantityChange::Increment),
            CartOp::Dec(id) => cart.set_quantity(id, QuantityChange::Decrement),
        }
    }
}

impl FromStr for CartOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, id) = s
            .split_once('=')
            .ok_or_else(|| format!("expected OP=ID, got '{}'", s))?;
        let id: ProductId = id
            .trim()
            .parse()
            .map_err(|_| format!("invalid product id '{}'", id))?;

        match op.trim().to_lowercase().as_str() {
            "add" => Ok(CartOp::Add(id)),
            "inc" | "increment" => Ok(CartOp::Inc(id)),
            "dec" | "decrement" => Ok(CartOp::Dec(id)),
            other => Err(format!("unknown cart operation '{}' (use add, inc or dec)", other)),
        }
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add(id) => write!(f, "add={}", id),
            CartOp::Inc(id) => write!(f, "inc={}", id),
            CartOp::Dec(id) => write!(f, "dec={}", id),
        }
    }
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let output = ctx.output.clone();
    let mut cart = CartAggregator::from_products(catalog.products())
        .with_observer(LogObserver)
        .with_observer(move |event: &CartEvent| output.success(&event.message()));

    for op in &args.ops {
        if let Err(e) = op.apply(&mut cart) {
            ctx.output.warn(&format!("{}: {}", op, e));
        }
    }

    let summary = cart.summary()?;

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    if args.all {
        ctx.output.header("Listings");
        for line in cart.cart().lines() {
            let marker = if line.in_cart() { "*" } else { " " };
            ctx.output.list_item(&format!(
                "{} #{} {} x{}",
                marker,
                line.product_id(),
                line.product_name(),
                line.quantity()
            ));
        }
    } else if !summary.lines.is_empty() {
        ctx.output.header("In cart");
        for line in &summary.lines {
            ctx.output.list_item(&format!(
                "{} x{} = {}",
                line.product_name,
                line.quantity,
                line.total.display()
            ));
        }
    }

    ctx.output.header("Summary");
    ctx.output.kv("items", &summary.total_items.to_string());
    ctx.output.kv("distinct", &summary.distinct_items.to_string());
    ctx.output.kv("subtotal", &summary.subtotal.display());
    if summary.has_savings() {
        ctx.output.kv(
            "savings",
            &format!(
                "{} ({:.0}%)",
                summary.savings.display(),
                summary.savings_percentage()
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrimart_commerce::catalog::sample_catalog;

    #[test]
    fn test_parse_ops() {
        assert_eq!("add=4".parse::<CartOp>().unwrap(), CartOp::Add(ProductId::new(4)));
        assert_eq!("inc=12".parse::<CartOp>().unwrap(), CartOp::Inc(ProductId::new(12)));
        assert_eq!("DEC = 1".parse::<CartOp>().unwrap(), CartOp::Dec(ProductId::new(1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("add".parse::<CartOp>().is_err());
        assert!("add=x".parse::<CartOp>().is_err());
        assert!("remove=3".parse::<CartOp>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let op = CartOp::Inc(ProductId::new(9));
        assert_eq!(op.to_string().parse::<CartOp>().unwrap(), op);
    }

    #[test]
    fn test_apply_sequence() {
        let catalog = sample_catalog();
        let mut cart = CartAggregator::from_products(catalog.products());
        let ops = ["add=1", "inc=1", "inc=2", "dec=2", "dec=3"];
        for op in ops {
            op.parse::<CartOp>().unwrap().apply(&mut cart).unwrap();
        }

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_value().unwrap().amount_cents, 998);
    }

    #[test]
    fn test_apply_unknown_product_fails() {
        let catalog = sample_catalog();
        let mut cart = CartAggregator::from_products(catalog.products());
        assert!(CartOp::Add(ProductId::new(404)).apply(&mut cart).is_err());
        assert_eq!(cart.total_items(), 0);
    }
}
