//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! HTML pages are served at the top level, one path per dashboard page.
//! The same operations are exposed as JSON under `/api`, with CORS open so
//! other tools can script them. The injected SEO data provider is reachable
//! under `/api/provider`.

pub mod api;
pub mod pages;
pub mod provider;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::{AppState, PageError};

/// JSON routes.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/dashboard", get(api::dashboard))
        .route("/api/keywords", get(api::keyword_results).post(api::research_keywords))
        .route("/api/rankings", get(api::rankings).post(api::load_rankings))
        .route("/api/competitors", get(api::competitors).post(api::analyze_competitors))
        .route("/api/audit", get(api::audit).post(api::run_audit))
        .route("/api/provider/{operation}", post(provider::call))
        .layer(cors)
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::dashboard))
        .route("/keywords", get(pages::keywords).post(pages::research))
        .route("/keywords/save", post(pages::toggle_saved))
        .route("/keywords/export.csv", get(pages::export_csv))
        .route("/rankings", get(pages::rankings))
        .route("/rankings/refresh", post(pages::refresh_rankings))
        .route("/competitors", get(pages::competitors).post(pages::analyze_competitors))
        .route("/audit", get(pages::audit).post(pages::run_audit))
        .route("/healthz", get(healthz))
        .merge(api_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub(crate) fn page_error_status(err: &PageError) -> StatusCode {
    match err {
        PageError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        PageError::AlreadyLoading => StatusCode::CONFLICT,
        PageError::TaskFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
