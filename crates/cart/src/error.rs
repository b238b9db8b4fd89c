//! Cart operation outcomes.

use thiserror::Error;

/// Failure reported by an inventory or cart-store backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct LookupError(pub String);

/// Outcome of a failed cart mutation.
///
/// Every variant is recoverable at the request boundary; a failed operation
/// leaves the input cart untouched. Display strings are the user-facing
/// messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Requested quantity was not a usable integer.
    #[error("Invalid quantity.")]
    InvalidQuantity,

    /// Product is not (or no longer) in the catalog.
    #[error("Product not found.")]
    ProductNotFound,

    /// Requested quantity exceeds the stock available right now.
    #[error("Not enough stock for {name}. Available: {available}")]
    InsufficientStock { name: String, available: i64 },

    /// Inventory or cart-store I/O failed. The only variant that is a
    /// server-side fault rather than a user-input outcome.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl CartError {
    /// Stable machine-readable code for wire payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            CartError::InvalidQuantity => "invalid_quantity",
            CartError::ProductNotFound => "product_not_found",
            CartError::InsufficientStock { .. } => "insufficient_stock",
            CartError::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

impl From<LookupError> for CartError {
    fn from(err: LookupError) -> Self {
        CartError::StoreUnavailable(err.0)
    }
}
