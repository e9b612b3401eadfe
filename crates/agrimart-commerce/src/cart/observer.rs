//! Cart change notifications.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A successful cart mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// `add_to_cart` made sure the product is in the cart.
    Added {
        product_id: ProductId,
        product_name: String,
        quantity: u32,
    },
    /// A quantity button left the line with at least one unit.
    QuantityChanged { product_id: ProductId, quantity: u32 },
    /// A decrement left the line at zero.
    Emptied { product_id: ProductId },
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::Added { product_id, .. }
            | CartEvent::QuantityChanged { product_id, .. }
            | CartEvent::Emptied { product_id } => *product_id,
        }
    }

    /// Acknowledgement text for a toast.
    pub fn message(&self) -> String {
        match self {
            CartEvent::Added { product_name, .. } => format!("{product_name} added to cart"),
            CartEvent::QuantityChanged { quantity, .. } => format!("Quantity updated to {quantity}"),
            CartEvent::Emptied { .. } => "Item removed from cart".to_string(),
        }
    }
}

/// Receives cart events after each successful mutation.
///
/// Implemented for any `Fn(&CartEvent)`, so a closure can be registered
/// directly.
pub trait CartObserver {
    fn on_event(&self, event: &CartEvent);
}

impl<F> CartObserver for F
where
    F: Fn(&CartEvent),
{
    fn on_event(&self, event: &CartEvent) {
        self(event)
    }
}

/// Logs every cart event at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl CartObserver for LogObserver {
    fn on_event(&self, event: &CartEvent) {
        tracing::debug!(product_id = %event.product_id(), event = ?event, "{}", event.message());
    }
}
