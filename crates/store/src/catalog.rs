//! Catalog persistence and the cart's inventory lookup over it.

use storefront_cart::{InventoryLookup, LookupError};
use storefront_catalog::{Product, ProductSnapshot};
use storefront_core::ProductId;

use crate::document_store::{DocumentStore, InMemoryDocumentStore};

/// Catalog-backed product records.
///
/// Also serves as the cart's [`InventoryLookup`]: every fetch reads the
/// store's current record, so stock is never reported from a cached value.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: InMemoryDocumentStore<ProductId, Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: Product) {
        self.products.upsert(product.id(), product);
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id)
    }

    /// All products, ordered by id (UUIDv7, so creation order).
    pub fn list(&self) -> Vec<Product> {
        let mut products = self.products.list();
        products.sort_by_key(|p| *p.id().as_uuid());
        products
    }

    pub fn len(&self) -> usize {
        self.products.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn delete(&self, id: ProductId) {
        self.products.remove(&id);
    }
}

impl InventoryLookup for CatalogStore {
    fn fetch_product(&self, id: &ProductId) -> Result<Option<ProductSnapshot>, LookupError> {
        Ok(self.get(*id).map(|product| product.snapshot()))
    }
}
