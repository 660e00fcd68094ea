use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

use linkin_types::api::{PageDataResponse, StatusResponse};
use linkin_types::models::PageUpdate;

use crate::error::ApiError;
use crate::{AppState, run_blocking};

/// GET /api/pagedata: settings row plus active links and socials.
pub async fn get_page_data(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let (page, links, socials) = run_blocking(&state, |app| {
        Ok((app.db.get_page()?, app.db.get_links()?, app.db.get_socials()?))
    })
    .await?;

    let page_data = match page {
        Some(page) => serde_json::to_value(page).map_err(|e| ApiError::Database(e.into()))?,
        None => json!({}),
    };

    Ok(Json(PageDataResponse {
        success: true,
        page_data,
        link_data: links,
        social_data: socials,
    }))
}

/// POST /api/updatepagedata: overwrite name, description and both colors.
/// Values are stored as sent.
pub async fn update_page_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let Json(update) = Json::<PageUpdate>::from_bytes(&body)?;

    run_blocking(&state, move |app| app.db.update_page(&update)).await?;

    info!("Page data updated");

    Ok(Json(StatusResponse::ok("Page data updated successfully")))
}
