use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Duration, Utc};

use storefront_auth::{JwtClaims, UserAccount};
use storefront_core::UserId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;
use crate::middleware;

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route(
            "/whoami",
            get(whoami).route_layer(axum::middleware::from_fn(middleware::require_auth)),
        )
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let account = match UserAccount::register(
        UserId::new(),
        &body.name,
        &body.email,
        &body.password,
        Utc::now(),
    ) {
        Ok(account) => account,
        Err(err) => return errors::domain_error_to_response(err),
    };

    if let Err(err) = services.accounts.register(account.clone()) {
        return errors::domain_error_to_response(err);
    }

    tracing::info!(user_id = %account.id(), "registered new account");
    signed_in_response(&services, &account, StatusCode::CREATED)
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    // Same response for an unknown email and a wrong password.
    let account = services
        .accounts
        .find_by_email(&body.email)
        .filter(|account| account.verify_password(&body.password));

    match account {
        Some(account) => signed_in_response(&services, &account, StatusCode::OK),
        None => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Invalid email or password.",
        ),
    }
}

pub async fn logout() -> axum::response::Response {
    let mut res = (StatusCode::OK, Json(serde_json::json!({ "ok": true }))).into_response();
    middleware::append_set_cookie(&mut res, &middleware::clear_auth_cookie());
    res
}

pub async fn whoami(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
) -> axum::response::Response {
    match services.accounts.get(user.user_id()) {
        Some(account) => (
            StatusCode::OK,
            Json(serde_json::json!({ "user": dto::user_to_json(&account) })),
        )
            .into_response(),
        None => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "account no longer exists",
        ),
    }
}

/// Mint a fresh auth token for the account and attach it as a cookie.
fn signed_in_response(
    services: &AppServices,
    account: &UserAccount,
    status: StatusCode,
) -> axum::response::Response {
    let claims = JwtClaims::issue(
        account.id(),
        Utc::now(),
        Duration::seconds(middleware::AUTH_TOKEN_TTL_SECONDS),
    );
    let token = match services.tokens.encode(&claims) {
        Ok(token) => token,
        Err(err) => {
            tracing::error!(error = %err, "auth token encoding failed");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "failed to issue auth token",
            );
        }
    };

    let mut res = (
        status,
        Json(serde_json::json!({ "user": dto::user_to_json(account) })),
    )
        .into_response();
    middleware::append_set_cookie(&mut res, &middleware::auth_cookie(&token));
    res
}
