//! HTTP API application wiring (Axum router + service wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `services.rs`: store wiring and shared service handles
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use storefront_auth::Hs256TokenCodec;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String) -> Router {
    let tokens = Arc::new(Hs256TokenCodec::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState {
        tokens: Arc::clone(&tokens),
    };

    let services = Arc::new(services::build_services(tokens));

    // Session-scoped routes: every request carries a session, and the auth
    // cookie resolves to an identity when valid.
    let session_routes = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::identity_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::session_middleware));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(session_routes)
        .layer(ServiceBuilder::new())
}
