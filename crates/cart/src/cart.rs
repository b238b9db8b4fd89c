//! Cart state: an ordered collection of line items.

use serde::{Deserialize, Serialize};

use storefront_catalog::ProductSnapshot;
use storefront_core::ProductId;

/// One product entry in a cart.
///
/// Invariant: `quantity >= 1`. A line that would drop to zero is removed,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub snapshot: ProductSnapshot,
    pub quantity: i64,
}

/// Ordered sequence of cart lines, one per distinct product.
///
/// New products append; existing products update in place, so insertion
/// order is stable for display. Owned exclusively by one session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Read model of a cart: its lines plus the exact integer subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub subtotal_cents: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The line for a product, if present.
    pub fn find(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.snapshot.product_id == product_id)
    }

    /// Quantity currently carried for a product (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.find(product_id).map_or(0, |line| line.quantity)
    }

    /// Subtotal in smallest currency unit, accumulated in line order.
    pub fn subtotal_cents(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| line.snapshot.price_cents * line.quantity as u64)
            .sum()
    }

    pub fn view(&self) -> CartView {
        CartView {
            lines: self.lines.clone(),
            subtotal_cents: self.subtotal_cents(),
        }
    }

    /// Set a product's line to `quantity` with a fresh snapshot, keeping its
    /// position; appends when the product is new to the cart.
    pub(crate) fn upsert(&mut self, snapshot: ProductSnapshot, quantity: i64) {
        debug_assert!(quantity >= 1);
        let product_id = snapshot.product_id;
        match self
            .lines
            .iter_mut()
            .find(|line| line.snapshot.product_id == product_id)
        {
            Some(line) => {
                line.snapshot = snapshot;
                line.quantity = quantity;
            }
            None => self.lines.push(CartLine { snapshot, quantity }),
        }
    }

    pub(crate) fn drop_line(&mut self, product_id: ProductId) {
        self.lines
            .retain(|line| line.snapshot.product_id != product_id);
    }
}
