//! Sample catalog data loaded at startup.

use chrono::Utc;
use storefront_catalog::{Category, NewProduct, Product};
use storefront_core::{DomainResult, ProductId};

use crate::catalog::CatalogStore;

/// Populate the catalog with the sample products. A catalog that already
/// holds records is left alone so restarts do not duplicate the data.
pub fn seed_catalog(catalog: &CatalogStore) -> DomainResult<usize> {
    if !catalog.is_empty() {
        tracing::debug!(products = catalog.len(), "catalog already seeded, skipping");
        return Ok(0);
    }

    let now = Utc::now();
    let mut seeded = 0;
    for input in sample_products() {
        let product = Product::create(ProductId::new(), input, now)?;
        catalog.insert(product);
        seeded += 1;
    }

    tracing::info!(products = seeded, "seeded sample catalog");
    Ok(seeded)
}

fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Wireless Bluetooth Headphones".to_string(),
            description:
                "High-quality wireless headphones with noise cancellation and 30-hour battery life."
                    .to_string(),
            price_cents: 14999,
            image_url: Some(
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            stock: 15,
            category: Some(Category::Electronics),
        },
        NewProduct {
            name: "Premium Coffee Maker".to_string(),
            description: "Programmable coffee maker with built-in grinder and thermal carafe."
                .to_string(),
            price_cents: 8999,
            image_url: Some(
                "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            stock: 8,
            category: Some(Category::Electronics),
        },
        NewProduct {
            name: "Fitness Tracker Watch".to_string(),
            description: "Smart fitness tracker with heart rate monitor, GPS, and sleep tracking."
                .to_string(),
            price_cents: 19999,
            image_url: Some(
                "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            stock: 12,
            category: Some(Category::Electronics),
        },
        NewProduct {
            name: "Organic Cotton T-Shirt".to_string(),
            description: "Comfortable organic cotton t-shirt available in multiple colors."
                .to_string(),
            price_cents: 2499,
            image_url: Some(
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            stock: 25,
            category: Some(Category::Apparel),
        },
        NewProduct {
            name: "Laptop Stand".to_string(),
            description: "Adjustable aluminum laptop stand for better ergonomics and cooling."
                .to_string(),
            price_cents: 3999,
            image_url: Some(
                "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            stock: 20,
            category: Some(Category::Electronics),
        },
        NewProduct {
            name: "Wireless Charging Pad".to_string(),
            description: "Fast wireless charging pad compatible with all Qi-enabled devices."
                .to_string(),
            price_cents: 2999,
            image_url: Some(
                "https://images.unsplash.com/photo-1572569511254-d8f925fe2cbb?w=400&h=300&fit=crop"
                    .to_string(),
            ),
            stock: 18,
            category: Some(Category::Electronics),
        },
    ]
}
