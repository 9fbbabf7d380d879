//! DataForSEO v3 client.
//!
//! Thin HTTP wrapper: every operation is one authenticated POST whose body
//! is a single-task JSON array. Responses come back unchanged. Task builders
//! are pure functions for testability.

use std::time::Duration;

use serde_json::{Value, json};

use super::config::DataForSeoConfig;
use super::types::{ProviderError, SeoDataProvider, classify_status};

const LANGUAGE: &str = "English";
const DEFAULT_LOCATION: &str = "United States";

pub(crate) const KEYWORDS_FOR_KEYWORDS: &str = "/keywords_data/google_ads/keywords_for_keywords/live";
pub(crate) const SERP_ORGANIC: &str = "/serp/google/organic/live/regular";
pub(crate) const DOMAIN_RANK_OVERVIEW: &str = "/dataforseo_labs/google/domain_rank_overview/live";
pub(crate) const SEARCH_VOLUME: &str = "/keywords_data/google_ads/search_volume/live";
pub(crate) const MY_BUSINESS_FIND: &str = "/business_data/google/my_business/find/live";
pub(crate) const LIGHTHOUSE: &str = "/on_page/lighthouse/live";

// =============================================================================
// CLIENT
// =============================================================================

pub struct DataForSeoClient {
    http: reqwest::Client,
    base_url: String,
    login: String,
    password: String,
}

impl DataForSeoClient {
    /// # Errors
    ///
    /// Returns [`ProviderError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: DataForSeoConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, login: config.login, password: config.password })
    }

    async fn post_task(&self, path: &str, task: Value) -> Result<Value, ProviderError> {
        let result = self.send(path, task).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, endpoint = path, "dataforseo request failed");
        }
        result
    }

    async fn send(&self, path: &str, task: Value) -> Result<Value, ProviderError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.login, Some(&self.password))
            .json(&[task])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if let Some(err) = classify_status(status, text.clone()) {
            return Err(err);
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl SeoDataProvider for DataForSeoClient {
    fn name(&self) -> &str {
        "DataForSEO API"
    }

    async fn keyword_suggestions(&self, keyword: &str, location: Option<&str>) -> Result<Value, ProviderError> {
        self.post_task(KEYWORDS_FOR_KEYWORDS, keyword_suggestions_task(keyword, location))
            .await
    }

    async fn local_pack_rankings(&self, keyword: &str, location: &str) -> Result<Value, ProviderError> {
        self.post_task(SERP_ORGANIC, serp_task(keyword, location)).await
    }

    async fn competitor_overview(&self, domain: &str) -> Result<Value, ProviderError> {
        self.post_task(DOMAIN_RANK_OVERVIEW, domain_overview_task(domain))
            .await
    }

    async fn search_volume(&self, keywords: &[String]) -> Result<Value, ProviderError> {
        self.post_task(SEARCH_VOLUME, search_volume_task(keywords)).await
    }

    async fn local_business_listings(&self, keyword: &str, location: &str) -> Result<Value, ProviderError> {
        self.post_task(MY_BUSINESS_FIND, business_listings_task(keyword, location))
            .await
    }

    async fn site_audit(&self, domain: &str) -> Result<Value, ProviderError> {
        self.post_task(LIGHTHOUSE, lighthouse_task(domain)).await
    }
}

// =============================================================================
// TASK BUILDERS
// =============================================================================

pub(crate) fn keyword_suggestions_task(keyword: &str, location: Option<&str>) -> Value {
    json!({
        "keywords": [keyword],
        "location_name": location.unwrap_or(DEFAULT_LOCATION),
        "language_name": LANGUAGE,
    })
}

pub(crate) fn serp_task(keyword: &str, location: &str) -> Value {
    json!({
        "keyword": keyword,
        "location_name": location,
        "language_name": LANGUAGE,
        "device": "desktop",
        "os": "windows",
    })
}

pub(crate) fn domain_overview_task(domain: &str) -> Value {
    json!({
        "target": domain,
        "location_name": DEFAULT_LOCATION,
        "language_name": LANGUAGE,
    })
}

pub(crate) fn search_volume_task(keywords: &[String]) -> Value {
    json!({
        "keywords": keywords,
        "location_name": DEFAULT_LOCATION,
        "language_name": LANGUAGE,
    })
}

pub(crate) fn business_listings_task(keyword: &str, location: &str) -> Value {
    json!({
        "keyword": keyword,
        "location_name": location,
        "language_name": LANGUAGE,
    })
}

pub(crate) fn lighthouse_task(domain: &str) -> Value {
    json!({
        "url": format!("https://{domain}"),
        "device": "desktop",
    })
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(text: &str) -> Result<Value, ProviderError> {
    serde_json::from_str(text).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
#[path = "dataforseo_test.rs"]
mod tests;
