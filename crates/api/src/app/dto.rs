use serde::Deserialize;
use serde_json::json;

use storefront_auth::UserAccount;
use storefront_cart::CartView;
use storefront_catalog::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Quantity arrives as the raw string the client submitted; the cart
/// service owns parsing it.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub quantity: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id().to_string(),
        "name": product.name(),
        "description": product.description(),
        "price_cents": product.price_cents(),
        "image_url": product.image_url(),
        "stock": product.stock(),
        "category": product.category(),
        "created_at": product.created_at().to_rfc3339(),
    })
}

pub fn cart_to_json(view: &CartView) -> serde_json::Value {
    let lines = view
        .lines
        .iter()
        .map(|line| {
            json!({
                "product_id": line.snapshot.product_id.to_string(),
                "name": line.snapshot.name,
                "price_cents": line.snapshot.price_cents,
                "image_url": line.snapshot.image_url,
                "quantity": line.quantity,
                "line_total_cents": line.snapshot.price_cents * line.quantity as u64,
            })
        })
        .collect::<Vec<_>>();

    json!({
        "lines": lines,
        "subtotal_cents": view.subtotal_cents,
    })
}

pub fn user_to_json(account: &UserAccount) -> serde_json::Value {
    json!({
        "id": account.id().to_string(),
        "name": account.name(),
        "email": account.email(),
    })
}
