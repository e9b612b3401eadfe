//! Shopping cart module.
//!
//! Contains the cart state, change notifications, and the aggregator that
//! ties them together.

mod aggregator;
mod cart;
mod observer;
mod summary;

pub use aggregator::CartAggregator;
pub use cart::{Cart, CartLine, QuantityChange, MAX_QUANTITY_PER_LINE};
pub use observer::{CartEvent, CartObserver, LogObserver};
pub use summary::{CartSummary, LineSummary};
