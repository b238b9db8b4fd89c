use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_cart::{Cart, CartError};
use storefront_core::DomainError;

use crate::app::dto;

/// Map a failed cart mutation to a response carrying the untouched cart.
///
/// Only store failures are logged server-side; the rest are ordinary
/// shopper outcomes.
pub fn cart_error_to_response(err: &CartError, cart: &Cart) -> axum::response::Response {
    let status = match err {
        CartError::InvalidQuantity => StatusCode::BAD_REQUEST,
        CartError::ProductNotFound => StatusCode::NOT_FOUND,
        CartError::InsufficientStock { .. } => StatusCode::CONFLICT,
        CartError::StoreUnavailable(_) => {
            tracing::error!(error = %err, "inventory lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        axum::Json(json!({
            "error": err.kind(),
            "message": err.to_string(),
            "cart": dto::cart_to_json(&cart.view()),
        })),
    )
        .into_response()
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Unauthorized => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
