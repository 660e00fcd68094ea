use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use linkin_crypto::session;
use tracing::debug;

use crate::auth::SESSION_COOKIE;
use crate::error::ApiError;

/// Reject requests without a live session token.
///
/// The token comes from `Authorization: Bearer` or the `auth_token` cookie.
/// It is unsigned, so this only keeps out clients that never logged in.
pub async fn require_session(
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&req)
        .or_else(|| cookie_token(&req))
        .ok_or_else(|| ApiError::Unauthorized("Login required".into()))?;

    let session = session::decode(&token)
        .map_err(|e| ApiError::Unauthorized(format!("Invalid session: {}", e)))?;

    if !session.is_valid_at(chrono::Utc::now().timestamp_millis()) {
        return Err(ApiError::Unauthorized("Session expired".into()));
    }

    debug!("Session for '{}' accepted", session.username);
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<String> {
    req.headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
}

fn cookie_token(req: &Request) -> Option<String> {
    req.headers()
        .typed_get::<Cookie>()
        .and_then(|cookies| cookies.get(SESSION_COOKIE).map(str::to_string))
        .filter(|token| !token.is_empty())
}
