//! Cart operations: validate the requested quantity, reconcile it against
//! stock fetched at call time, and produce the next cart state.

use std::sync::Arc;

use storefront_catalog::ProductSnapshot;
use storefront_core::ProductId;

use crate::cart::Cart;
use crate::error::{CartError, LookupError};

/// Read-only access to the catalog's current state.
pub trait InventoryLookup: Send + Sync {
    /// Current snapshot for a product, or `None` when it is not in the
    /// catalog. Implementations must report current stock, never a value
    /// cached from an earlier read.
    fn fetch_product(&self, id: &ProductId) -> Result<Option<ProductSnapshot>, LookupError>;
}

impl<L> InventoryLookup for Arc<L>
where
    L: InventoryLookup + ?Sized,
{
    fn fetch_product(&self, id: &ProductId) -> Result<Option<ProductSnapshot>, LookupError> {
        (**self).fetch_product(id)
    }
}

/// Applies requested cart changes, enforcing quantity and stock constraints.
///
/// Operations are pure over the input cart: on any failure the caller still
/// holds the prior cart unchanged (all-or-nothing). Every mutating operation
/// re-fetches the product snapshot at call time; stock comparisons never use
/// a snapshot stored in the cart.
#[derive(Debug, Clone)]
pub struct CartService<L> {
    inventory: L,
}

impl<L: InventoryLookup> CartService<L> {
    pub fn new(inventory: L) -> Self {
        Self { inventory }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// Cumulative: an existing line's quantity is increased, and the stock
    /// check applies to the prospective total, not the increment alone.
    pub fn add(
        &self,
        cart: &Cart,
        product_id: ProductId,
        quantity: &str,
    ) -> Result<Cart, CartError> {
        let qty = match parse_quantity(quantity) {
            Some(q) if q > 0 => q,
            _ => return Err(CartError::InvalidQuantity),
        };

        let snapshot = self
            .inventory
            .fetch_product(&product_id)?
            .ok_or(CartError::ProductNotFound)?;

        let prospective = cart.quantity_of(product_id) + qty;
        if prospective > snapshot.stock {
            return Err(CartError::InsufficientStock {
                name: snapshot.name,
                available: snapshot.stock,
            });
        }

        let mut next = cart.clone();
        next.upsert(snapshot, prospective);
        Ok(next)
    }

    /// Set a product's line to exactly `quantity`.
    ///
    /// Absolute, unlike `add`: the requested value replaces the line's
    /// quantity. Zero removes the line. A product with no line is a no-op
    /// success; there is nothing to update.
    pub fn update(
        &self,
        cart: &Cart,
        product_id: ProductId,
        quantity: &str,
    ) -> Result<Cart, CartError> {
        let qty = match parse_quantity(quantity) {
            Some(q) if q >= 0 => q,
            _ => return Err(CartError::InvalidQuantity),
        };

        if cart.find(product_id).is_none() {
            return Ok(cart.clone());
        }

        if qty == 0 {
            return Ok(self.remove(cart, product_id));
        }

        let snapshot = self
            .inventory
            .fetch_product(&product_id)?
            .ok_or(CartError::ProductNotFound)?;

        if qty > snapshot.stock {
            return Err(CartError::InsufficientStock {
                name: snapshot.name,
                available: snapshot.stock,
            });
        }

        let mut next = cart.clone();
        next.upsert(snapshot, qty);
        Ok(next)
    }

    /// Drop any line for the product. Idempotent; removing an absent product
    /// is a successful no-op.
    pub fn remove(&self, cart: &Cart, product_id: ProductId) -> Cart {
        let mut next = cart.clone();
        next.drop_line(product_id);
        next
    }
}

/// Parse a raw request field as an integer quantity.
///
/// The value arrives as free text from a form field, so parsing is part of
/// the operation, not the transport layer.
fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
