use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::snapshot::ProductSnapshot;

const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Catalog category, serialized with the storefront's display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Apparel,
    Books,
    #[serde(rename = "Home Goods")]
    HomeGoods,
    Furniture,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

/// Input for creating a catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    /// Falls back to the placeholder image when absent or blank.
    pub image_url: Option<String>,
    pub stock: i64,
    pub category: Option<Category>,
}

/// Aggregate root: Product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price_cents: u64,
    image_url: String,
    stock: i64,
    category: Category,
    created_at: DateTime<Utc>,
}

impl Product {
    pub fn create(
        id: ProductId,
        input: NewProduct,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if input.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }

        if input.stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }

        let image_url = match input.image_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE.to_string(),
        };

        Ok(Self {
            id,
            name: name.to_string(),
            description: input.description,
            price_cents: input.price_cents,
            image_url,
            stock: input.stock,
            category: input.category.unwrap_or_default(),
            created_at,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the available stock (admin adjustment, restock, correction).
    pub fn set_stock(&mut self, stock: i64) -> DomainResult<()> {
        if stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        self.stock = stock;
        Ok(())
    }

    /// Take an immutable copy of the product as the cart sees it.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            product_id: self.id,
            name: self.name.clone(),
            price_cents: self.price_cents,
            image_url: self.image_url.clone(),
            stock: self.stock,
        }
    }
}
