//! `storefront-catalog` — product catalog domain.
//!
//! Owns the `Product` aggregate and the immutable `ProductSnapshot` view
//! handed to the cart at mutation time.

pub mod product;
pub mod snapshot;

pub use product::{Category, NewProduct, Product};
pub use snapshot::ProductSnapshot;
