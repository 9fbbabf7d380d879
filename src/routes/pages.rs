//! HTML page handlers.
//!
//! GET handlers render the page's current state. Form posts run the page
//! operation and redirect back on success (post/redirect/get); on failure
//! they re-render the page with the error and the matching status.

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{Html, IntoResponse, Redirect, Response};
use leptos::prelude::*;
use serde::Deserialize;
use tracing::{error, warn};

use super::page_error_status;
use crate::model::KeywordQuery;
use crate::services::keywords::{KeywordFilter, KeywordSort, ResultsParams};
use crate::services::{audit, competitors, dashboard, export, rankings};
use crate::state::{AppState, PageError};
use crate::views::audit::AuditPage;
use crate::views::competitors::CompetitorsPage;
use crate::views::dashboard::DashboardPage;
use crate::views::keywords::{KeywordsPage, KeywordsView};
use crate::views::rankings::RankingsPage;
use crate::views::{NavItem, render_document};

// =============================================================================
// DASHBOARD
// =============================================================================

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    if let Err(e) = dashboard::ensure_loaded(&state).await {
        warn!(error = %e, "dashboard load failed");
    }
    let snapshot = state.pages.dashboard.snapshot();
    let provider = state.provider_name().map(str::to_owned);
    Html(render_document("Dashboard", NavItem::Dashboard, move || {
        view! { <DashboardPage state=snapshot provider=provider/> }
    }))
}

// =============================================================================
// KEYWORDS
// =============================================================================

fn render_keywords(state: &AppState, filter: KeywordFilter, sort: KeywordSort, notice: Option<String>) -> String {
    let view_model =
        KeywordsView { state: state.pages.keywords.snapshot(), filter, sort, saved: state.pages.saved(), notice };
    render_document("Keyword Research", NavItem::Keywords, move || view! { <KeywordsPage view_model=view_model/> })
}

pub async fn keywords(State(state): State<AppState>, Query(params): Query<ResultsParams>) -> Html<String> {
    Html(render_keywords(&state, params.filter(), params.sort(), None))
}

pub async fn research(State(state): State<AppState>, Form(query): Form<KeywordQuery>) -> Response {
    let result = crate::services::keywords::research(&state, query).await;
    form_outcome(result, "/keywords", |notice| {
        render_keywords(&state, KeywordFilter::default(), KeywordSort::default(), notice)
    })
}

#[derive(Debug, Deserialize)]
pub struct SaveForm {
    pub keyword: String,
    /// Results query string to return to.
    #[serde(default)]
    pub back: String,
}

pub async fn toggle_saved(State(state): State<AppState>, Form(form): Form<SaveForm>) -> Redirect {
    if let Err(e) = crate::services::keywords::toggle_saved(&state, &form.keyword) {
        warn!(error = %e, "saved keyword toggle ignored");
    }
    Redirect::to(&back_to_results(&form.back))
}

/// `/keywords` with the results query, when one was posted.
pub(crate) fn back_to_results(query: &str) -> String {
    let query = query.trim().trim_start_matches('?');
    if query.is_empty() { "/keywords".to_owned() } else { format!("/keywords?{query}") }
}

/// Download the current results as CSV. With nothing researched yet the file
/// holds only the header row.
pub async fn export_csv(State(state): State<AppState>) -> Response {
    let results = state
        .pages
        .keywords
        .data()
        .map(|run| run.results.clone())
        .unwrap_or_default();

    let lines = match export::csv_lines(&results) {
        Ok(lines) => lines,
        Err(e) => {
            error!(error = %e, "keyword export failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let stream = futures::stream::iter(lines.into_iter().enumerate().map(|(i, line)| {
        let chunk = if i == 0 { line } else { format!("\n{line}") };
        Ok::<axum::body::Bytes, std::convert::Infallible>(axum::body::Bytes::from(chunk))
    }));
    let body = axum::body::Body::from_stream(stream);

    (
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, &format!("attachment; filename=\"{}\"", export::CSV_FILENAME)),
        ],
        body,
    )
        .into_response()
}

// =============================================================================
// RANKINGS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct LocationParams {
    pub location: Option<String>,
}

fn render_rankings(state: &AppState, location: String, notice: Option<String>) -> String {
    let snapshot = state.pages.rankings.snapshot();
    render_document("Local Rankings", NavItem::Rankings, move || {
        view! { <RankingsPage state=snapshot location=location notice=notice/> }
    })
}

/// Render rankings for the requested location, loading them first when the
/// stored report is for another location or nothing is loaded.
pub async fn rankings(State(state): State<AppState>, Query(params): Query<LocationParams>) -> Html<String> {
    let location = match params.location.as_deref() {
        Some(raw) => rankings::resolve_location(Some(raw)),
        None => state
            .pages
            .rankings
            .data()
            .map_or_else(|| rankings::DEFAULT_LOCATION.to_owned(), |report| report.location.clone()),
    };
    if let Err(e) = rankings::ensure_for_location(&state, &location).await {
        warn!(error = %e, %location, "rankings load failed");
    }
    Html(render_rankings(&state, location, None))
}

pub async fn refresh_rankings(State(state): State<AppState>, Form(params): Form<LocationParams>) -> Response {
    let location = rankings::resolve_location(params.location.as_deref());
    let result = rankings::refresh(&state, &location).await;
    let target = format!("/rankings?location={}", urlencoding::encode(&location));
    form_outcome(result, &target, |notice| render_rankings(&state, location, notice))
}

// =============================================================================
// COMPETITORS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CompetitorForm {
    #[serde(default)]
    pub domains: String,
}

fn render_competitors(state: &AppState, notice: Option<String>) -> String {
    let snapshot = state.pages.competitors.snapshot();
    render_document("Competitor Analysis", NavItem::Competitors, move || {
        view! { <CompetitorsPage state=snapshot notice=notice/> }
    })
}

pub async fn competitors(State(state): State<AppState>) -> Html<String> {
    Html(render_competitors(&state, None))
}

pub async fn analyze_competitors(State(state): State<AppState>, Form(form): Form<CompetitorForm>) -> Response {
    let domains = competitors::parse_domains(&form.domains);
    let result = competitors::analyze_domains(&state, domains).await;
    form_outcome(result, "/competitors", |notice| render_competitors(&state, notice))
}

// =============================================================================
// AUDIT
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AuditForm {
    #[serde(default)]
    pub domain: String,
}

fn render_audit(state: &AppState, notice: Option<String>) -> String {
    let snapshot = state.pages.audit.snapshot();
    render_document("Site Audit", NavItem::Audit, move || view! { <AuditPage state=snapshot notice=notice/> })
}

pub async fn audit(State(state): State<AppState>) -> Html<String> {
    Html(render_audit(&state, None))
}

pub async fn run_audit(State(state): State<AppState>, Form(form): Form<AuditForm>) -> Response {
    let result = audit::audit_domain(&state, &form.domain).await;
    form_outcome(result, "/audit", |notice| render_audit(&state, notice))
}

// =============================================================================
// FORM OUTCOME
// =============================================================================

/// Redirect to `target` on success; otherwise re-render with the error's
/// status. A failed operation already shows in the page's failure banner, so
/// only rejected requests carry a notice.
fn form_outcome<T>(result: Result<T, PageError>, target: &str, render: impl FnOnce(Option<String>) -> String) -> Response {
    match result {
        Ok(_) => Redirect::to(target).into_response(),
        Err(e) => {
            let notice = match &e {
                PageError::TaskFailed(_) => None,
                PageError::InvalidInput(_) | PageError::AlreadyLoading => Some(e.to_string()),
            };
            (page_error_status(&e), Html(render(notice))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
