//! Passthrough routes to the injected SEO data provider.
//!
//! `POST /api/provider/{operation}` forwards the JSON body's fields to the
//! matching provider method and returns the vendor response unchanged.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ErrorBody, ErrorCode};
use crate::provider::{ProviderError, SeoDataProvider};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProviderRouteError {
    #[error("SEO data provider is not configured")]
    Disabled,
    #[error("unknown provider operation: {0}")]
    UnknownOperation(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ErrorCode for ProviderRouteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Disabled => "E_PROVIDER_DISABLED",
            Self::UnknownOperation(_) => "E_UNKNOWN_OPERATION",
            Self::MissingField(_) => "E_MISSING_FIELD",
            Self::Provider(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Provider(e) => e.retryable(),
            _ => false,
        }
    }
}

pub(crate) fn provider_error_status(err: &ProviderRouteError) -> StatusCode {
    match err {
        ProviderRouteError::Disabled | ProviderRouteError::Provider(ProviderError::MissingCredentials { .. }) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ProviderRouteError::UnknownOperation(_) => StatusCode::NOT_FOUND,
        ProviderRouteError::MissingField(_) => StatusCode::BAD_REQUEST,
        ProviderRouteError::Provider(ProviderError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        ProviderRouteError::Provider(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Provider operation addressed by the URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    KeywordSuggestions,
    LocalPackRankings,
    CompetitorOverview,
    SearchVolume,
    LocalBusinessListings,
    SiteAudit,
}

impl Operation {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "keyword-suggestions" => Some(Self::KeywordSuggestions),
            "local-pack-rankings" => Some(Self::LocalPackRankings),
            "competitor-overview" => Some(Self::CompetitorOverview),
            "search-volume" => Some(Self::SearchVolume),
            "local-business-listings" => Some(Self::LocalBusinessListings),
            "site-audit" => Some(Self::SiteAudit),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderRequest {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub domain: Option<String>,
    pub keywords: Option<Vec<String>>,
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ProviderRouteError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ProviderRouteError::MissingField(field))
}

/// Dispatch one request to `provider`.
///
/// # Errors
///
/// Returns [`ProviderRouteError::MissingField`] when the operation's inputs
/// are absent, or the provider's error.
pub async fn dispatch(
    provider: &dyn SeoDataProvider,
    operation: Operation,
    req: &ProviderRequest,
) -> Result<Value, ProviderRouteError> {
    let keyword = || required(req.keyword.as_deref(), "keyword");
    let location = || required(req.location.as_deref(), "location");
    let domain = || required(req.domain.as_deref(), "domain");

    let value = match operation {
        Operation::KeywordSuggestions => {
            let location = req.location.as_deref().map(str::trim).filter(|l| !l.is_empty());
            provider.keyword_suggestions(keyword()?, location).await?
        }
        Operation::LocalPackRankings => provider.local_pack_rankings(keyword()?, location()?).await?,
        Operation::CompetitorOverview => provider.competitor_overview(domain()?).await?,
        Operation::SearchVolume => {
            let keywords: Vec<String> = req
                .keywords
                .iter()
                .flatten()
                .map(|k| k.trim().to_owned())
                .filter(|k| !k.is_empty())
                .collect();
            if keywords.is_empty() {
                return Err(ProviderRouteError::MissingField("keywords"));
            }
            provider.search_volume(&keywords).await?
        }
        Operation::LocalBusinessListings => provider.local_business_listings(keyword()?, location()?).await?,
        Operation::SiteAudit => provider.site_audit(domain()?).await?,
    };
    Ok(value)
}

pub async fn call(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    Json(req): Json<ProviderRequest>,
) -> Response {
    let result = match (state.provider.as_deref(), Operation::parse(&operation)) {
        (_, None) => Err(ProviderRouteError::UnknownOperation(operation)),
        (None, Some(_)) => Err(ProviderRouteError::Disabled),
        (Some(provider), Some(op)) => dispatch(provider, op, &req).await,
    };

    match result {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, code = e.error_code(), "provider passthrough failed");
            (provider_error_status(&e), Json(ErrorBody::from_error(&e))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
