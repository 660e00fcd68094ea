use axum::{
    Json, Router,
    extract::State,
    http::{
        Method, Uri,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{MethodRouter, any, get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use linkin_types::api::UnderConstructionResponse;

use crate::middleware::require_session;
use crate::{AppState, auth, pages, views};

/// Full route table.
///
/// Any method other than the one registered on an `/api/` path, and any
/// unknown `/api/` path, gets the under-construction body with status 200.
/// Every other path renders the home page.
pub fn build_router(state: AppState) -> Router {
    let mut update_page: MethodRouter<AppState> =
        post(pages::update_page_data).fallback(under_construction);
    if state.config.enforce_session {
        update_page = update_page.route_layer(middleware::from_fn(require_session));
    }

    Router::new()
        .route("/api/user/login", post(auth::login).fallback(under_construction))
        .route("/api/user/logout", post(auth::logout).fallback(under_construction))
        .route("/api/pagedata", get(pages::get_page_data).fallback(under_construction))
        .route("/api/updatepagedata", update_page)
        .route("/admin", any(views::render_admin))
        .route("/dashboard", any(views::render_dashboard))
        .fallback(fallback)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answers every OPTIONS request itself and stamps `*` on everything else.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

async fn fallback(state: State<AppState>, method: Method, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        under_construction(method, uri).await.into_response()
    } else {
        views::render_home(state).await
    }
}

async fn under_construction(method: Method, uri: Uri) -> Json<UnderConstructionResponse> {
    Json(UnderConstructionResponse {
        success: false,
        message: "API endpoint under construction".into(),
        endpoint: uri.path().to_string(),
        method: method.to_string(),
    })
}
