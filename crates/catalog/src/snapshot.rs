use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// Immutable view of a catalog item taken at cart-mutation time.
///
/// The cart stores this copy, not a live reference, so the price and stock
/// it displays may lag the catalog until the next mutation re-fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    pub image_url: String,
    /// Available stock at the moment the snapshot was taken.
    pub stock: i64,
}
