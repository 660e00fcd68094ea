use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse},
};
use tracing::{info, warn};
use uuid::Uuid;

use linkin_crypto::{credentials, session};
use linkin_db::Database;
use linkin_types::api::{LoginRequest, LoginResponse, StatusResponse};
use linkin_types::models::SessionToken;

use crate::config::{AuthMode, Config};
use crate::error::ApiError;
use crate::{AppState, run_blocking};

/// Name of the cookie mirroring the token the browser keeps in local storage.
pub const SESSION_COOKIE: &str = "auth_token";

const REDIRECT_AFTER_LOGIN: &str = "/dashboard";

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    // Content-Type is not checked; only the body has to be JSON
    let Json(req) = Json::<LoginRequest>::from_bytes(&body)?;

    let username = req.username.clone();
    let accepted = run_blocking(&state, move |app| {
        check_credentials(&app.db, &app.config, &req.username, &req.password)
    })
    .await?;

    if !accepted {
        warn!("Failed login for '{}'", username);
        return Err(ApiError::Unauthorized("Invalid username or password".into()));
    }

    let issued = SessionToken::issue(&username, chrono::Utc::now().timestamp_millis());
    let token = session::encode(&issued).map_err(|e| ApiError::Database(e.into()))?;

    info!("'{}' logged in, session expires at {}", username, issued.expires);

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Json(LoginResponse {
            success: true,
            message: "Login successful".into(),
            token,
            redirect: REDIRECT_AFTER_LOGIN.into(),
        }),
    ))
}

/// Only clears the cookie. A copied token stays usable until it expires.
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(header::SET_COOKIE, cleared_cookie())]),
        Json(StatusResponse::ok("Logged out successfully")),
    )
}

pub fn check_credentials(db: &Database, config: &Config, username: &str, password: &str) -> anyhow::Result<bool> {
    match config.auth_mode {
        AuthMode::Fixed => Ok(username == config.admin_username && password == config.admin_password),
        AuthMode::Table => Ok(db.find_user_by_credentials(username, password)?.is_some()),
        AuthMode::Hashed => Ok(db
            .get_user_by_username(username)?
            .is_some_and(|user| credentials::verify_password(password, &config.hash_salt, &user.password))),
    }
}

/// Put the configured admin into an empty `users` table.
/// Does nothing in `fixed` mode or once any user exists.
pub fn seed_admin(db: &Database, config: &Config) -> anyhow::Result<()> {
    if config.auth_mode == AuthMode::Fixed || db.count_users()? > 0 {
        return Ok(());
    }

    let password = match config.auth_mode {
        AuthMode::Hashed => credentials::hash_password_argon2(&config.admin_password)?,
        _ => config.admin_password.clone(),
    };

    db.create_user(&Uuid::new_v4().to_string(), &config.admin_username, &password)?;
    info!("Seeded admin user '{}'", config.admin_username);
    Ok(())
}

fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; HttpOnly; Secure; SameSite=Strict; Max-Age={}",
        SESSION_COOKIE,
        token,
        SessionToken::LIFETIME_MS / 1000
    )
}

fn cleared_cookie() -> String {
    format!("{}=; HttpOnly; Secure; SameSite=Strict; Max-Age=0", SESSION_COOKIE)
}
