pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod views;

use std::sync::Arc;

use linkin_db::Database;
use tracing::error;

use crate::config::Config;
use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub config: Config,
}

/// Run blocking work (SQLite, password hashing) off the async runtime.
pub(crate) async fn run_blocking<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&AppStateInner) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Database(anyhow::anyhow!("query task failed"))
        })?
        .map_err(ApiError::Database)
}
