use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use storefront_cart::Cart;
use storefront_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(view_cart))
        .route("/add", post(add_to_cart))
        .route("/update", post(update_cart))
        .route("/remove", post(remove_from_cart))
}

pub async fn view_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let key = session.session_key();

    // The message from the last failed mutation is delivered exactly once.
    let message = services.sessions.take_pending_message(key);
    let cart = services.sessions.load(key);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "cart": dto::cart_to_json(&cart.view()),
            "message": message,
        })),
    )
        .into_response()
}

pub async fn add_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::AddToCartRequest>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&body.product_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    services.sessions.with_session(session.session_key(), |state| {
        match services.cart.add(&state.cart, product_id, &body.quantity) {
            Ok(next) => {
                state.cart = next;
                cart_response(&state.cart)
            }
            Err(err) => {
                state.pending_message = Some(err.to_string());
                errors::cart_error_to_response(&err, &state.cart)
            }
        }
    })
}

pub async fn update_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::UpdateCartRequest>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&body.product_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    services.sessions.with_session(session.session_key(), |state| {
        match services.cart.update(&state.cart, product_id, &body.quantity) {
            Ok(next) => {
                state.cart = next;
                cart_response(&state.cart)
            }
            Err(err) => {
                state.pending_message = Some(err.to_string());
                errors::cart_error_to_response(&err, &state.cart)
            }
        }
    })
}

pub async fn remove_from_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::RemoveFromCartRequest>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&body.product_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    services.sessions.with_session(session.session_key(), |state| {
        state.cart = services.cart.remove(&state.cart, product_id);
        cart_response(&state.cart)
    })
}

fn parse_product_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
    })
}

fn cart_response(cart: &Cart) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "cart": dto::cart_to_json(&cart.view()) })),
    )
        .into_response()
}
