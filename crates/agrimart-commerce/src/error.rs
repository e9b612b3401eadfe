//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, PartialEq)]
pub enum CommerceError {
    /// Product is not part of the catalog the cart was built from.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category name not recognised.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Sort key not recognised.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Price range with min above max.
    #[error("Invalid price range: min {min} is above max {max}")]
    InvalidPriceRange { min: String, max: String },

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
