//! `storefront-store` — in-memory persistence for the storefront.
//!
//! Catalog and account records live in a generic key/value document store;
//! carts live in a per-session store that serializes mutations per session.

pub mod accounts;
pub mod catalog;
pub mod document_store;
pub mod seed;
pub mod session;

pub use accounts::AccountStore;
pub use catalog::CatalogStore;
pub use document_store::{DocumentStore, InMemoryDocumentStore};
pub use seed::seed_catalog;
pub use session::{CartSession, CartSessionStore};
