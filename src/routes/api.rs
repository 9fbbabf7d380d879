//! JSON API handlers.
//!
//! Reads return the page's current snapshot: `status` is one of `idle`,
//! `loading`, `success`, `failed`. `data` is the latest successful run, which
//! stays present while a newer run is loading or after it failed.
//! Writes run the operation and return the stored result.

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::page_error_status;
use crate::error::ErrorBody;
use crate::model::{AuditReport, CompetitorReport, KeywordQuery, KeywordResult, RankingReport};
use crate::services::dashboard::DashboardData;
use crate::services::keywords::{self, ResultsParams};
use crate::services::{audit, competitors, dashboard, rankings};
use crate::state::{AppState, Loaded, PageError, PageState};

// =============================================================================
// RESPONSE SHAPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    /// Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> PageSnapshot<T> {
    /// Snapshot of `state`, with the latest successful data mapped through
    /// `project`.
    pub fn from_state<S>(state: &PageState<S>, project: impl FnOnce(&Arc<S>) -> T) -> Self {
        let loaded = state.loaded();
        Self {
            status: state.label(),
            run_id: loaded.map(|l| l.run_id.to_string()),
            completed_at: loaded.map(|l| l.completed_at.unix_timestamp()),
            data: loaded.map(|l| project(&l.data)),
            error: state.error().map(str::to_owned),
        }
    }

    fn from_loaded<S>(loaded: &Loaded<S>, project: impl FnOnce(&Arc<S>) -> T) -> Self {
        Self {
            status: "success",
            run_id: Some(loaded.run_id.to_string()),
            completed_at: Some(loaded.completed_at.unix_timestamp()),
            data: Some(project(&loaded.data)),
            error: None,
        }
    }
}

fn cloned<T: Clone>(data: &Arc<T>) -> T {
    T::clone(data)
}

/// Keyword run as returned by the API: the query plus filtered results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordPayload {
    pub query: KeywordQuery,
    pub total: usize,
    pub results: Vec<KeywordResult>,
    pub saved: BTreeSet<String>,
}

fn page_error_response(err: &PageError) -> Response {
    (page_error_status(err), Json(ErrorBody::from_error(err))).into_response()
}

fn respond<T: Serialize>(result: Result<PageSnapshot<T>, PageError>) -> Response {
    match result {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => page_error_response(&e),
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

pub async fn dashboard(State(state): State<AppState>) -> Json<PageSnapshot<DashboardData>> {
    if let Err(e) = dashboard::ensure_loaded(&state).await {
        warn!(error = %e, "dashboard load failed");
    }
    Json(PageSnapshot::from_state(&state.pages.dashboard.snapshot(), cloned))
}

pub async fn keyword_results(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> Json<PageSnapshot<KeywordPayload>> {
    let (filter, sort) = (params.filter(), params.sort());
    let saved = state.pages.saved();
    Json(PageSnapshot::from_state(&state.pages.keywords.snapshot(), |run| KeywordPayload {
        query: run.query.clone(),
        total: run.results.len(),
        results: keywords::apply(&run.results, &filter, sort),
        saved,
    }))
}

pub async fn research_keywords(State(state): State<AppState>, Json(query): Json<KeywordQuery>) -> Response {
    let result = keywords::research(&state, query).await.map(|loaded| {
        PageSnapshot::from_loaded(&loaded, |run| KeywordPayload {
            query: run.query.clone(),
            total: run.results.len(),
            results: run.results.clone(),
            saved: BTreeSet::new(),
        })
    });
    respond(result)
}

pub async fn rankings(State(state): State<AppState>) -> Json<PageSnapshot<RankingReport>> {
    Json(PageSnapshot::from_state(&state.pages.rankings.snapshot(), cloned))
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationBody {
    #[serde(default)]
    pub location: Option<String>,
}

pub async fn load_rankings(State(state): State<AppState>, Json(body): Json<LocationBody>) -> Response {
    let location = rankings::resolve_location(body.location.as_deref());
    let result = rankings::refresh(&state, &location).await.map(|loaded| PageSnapshot::from_loaded(&loaded, cloned));
    respond(result)
}

pub async fn competitors(State(state): State<AppState>) -> Json<PageSnapshot<CompetitorReport>> {
    Json(PageSnapshot::from_state(&state.pages.competitors.snapshot(), cloned))
}

#[derive(Debug, Deserialize)]
pub struct CompetitorsBody {
    #[serde(default)]
    pub domains: Vec<String>,
}

pub async fn analyze_competitors(State(state): State<AppState>, Json(body): Json<CompetitorsBody>) -> Response {
    let result = competitors::analyze_domains(&state, body.domains)
        .await
        .map(|loaded| PageSnapshot::from_loaded(&loaded, cloned));
    respond(result)
}

pub async fn audit(State(state): State<AppState>) -> Json<PageSnapshot<AuditReport>> {
    Json(PageSnapshot::from_state(&state.pages.audit.snapshot(), cloned))
}

#[derive(Debug, Deserialize)]
pub struct AuditBody {
    #[serde(default)]
    pub domain: String,
}

pub async fn run_audit(State(state): State<AppState>, Json(body): Json<AuditBody>) -> Response {
    let result = audit::audit_domain(&state, &body.domain)
        .await
        .map(|loaded| PageSnapshot::from_loaded(&loaded, cloned));
    respond(result)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
