//! `storefront-cart` — cart decision logic.
//!
//! Pure cart mutations reconciled against live stock. Operations take a cart
//! by reference and return a new cart; persistence belongs to the caller.

pub mod cart;
pub mod error;
pub mod service;

pub use cart::{Cart, CartLine, CartView};
pub use error::{CartError, LookupError};
pub use service::{CartService, InventoryLookup};
