use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use storefront_auth::{Hs256TokenCodec, validate_claims};
use storefront_core::{SessionKey, UserId};

use crate::context::{CurrentUser, SessionContext};

pub const SESSION_COOKIE: &str = "sid";
pub const AUTH_COOKIE: &str = "jwt";

/// Auth token lifetime in seconds; a fresh token is minted at each login.
pub const AUTH_TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<Hs256TokenCodec>,
}

/// Attach a session to every request, minting the `sid` cookie on first
/// touch.
pub async fn session_middleware(mut req: Request<Body>, next: Next) -> Response {
    let existing = cookie_value(req.headers(), SESSION_COOKIE)
        .and_then(|raw| raw.parse::<SessionKey>().ok());
    let (key, minted) = match existing {
        Some(key) => (key, false),
        None => (SessionKey::new(), true),
    };
    req.extensions_mut().insert(SessionContext::new(key));

    let mut res = next.run(req).await;
    if minted {
        append_set_cookie(&mut res, &session_cookie(key));
    }
    res
}

/// Resolve the authenticated identity from the auth cookie, when present.
///
/// An expired or forged token is cleared from the client and the request
/// continues anonymously; only routes behind [`require_auth`] reject it.
pub async fn identity_middleware(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let mut stale_token = false;
    if let Some(token) = cookie_value(req.headers(), AUTH_COOKIE) {
        match authenticate(&state.tokens, token) {
            Some(user_id) => {
                req.extensions_mut().insert(CurrentUser::new(user_id));
            }
            None => stale_token = true,
        }
    }

    let mut res = next.run(req).await;
    if stale_token {
        append_set_cookie(&mut res, &clear_auth_cookie());
    }
    res
}

fn authenticate(tokens: &Hs256TokenCodec, token: &str) -> Option<UserId> {
    let claims = tokens.decode(token).ok()?;
    validate_claims(&claims, Utc::now()).ok()?;
    Some(claims.sub)
}

/// Reject requests that did not present a valid auth token.
pub async fn require_auth(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    if req.extensions().get::<CurrentUser>().is_none() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(req).await)
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let header = headers.get(header::COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

pub fn session_cookie(key: SessionKey) -> String {
    format!("{SESSION_COOKIE}={key}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn auth_cookie(token: &str) -> String {
    format!(
        "{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={AUTH_TOKEN_TTL_SECONDS}"
    )
}

pub fn clear_auth_cookie() -> String {
    format!("{AUTH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub fn append_set_cookie(res: &mut Response, cookie: &str) {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        res.headers_mut().append(header::SET_COOKIE, value);
    }
}
