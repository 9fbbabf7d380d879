//! Provider-neutral SEO data types and errors.

use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by SEO data provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A required credential environment variable is not set.
    #[error("missing credentials: env var {var} not set")]
    MissingCredentials { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("provider request failed: {0}")]
    Transport(String),

    /// The provider refused the configured credentials.
    #[error("provider rejected credentials: status {status}")]
    Unauthorized { status: u16 },

    /// The provider throttled the account.
    #[error("provider rate limit exceeded")]
    RateLimited,

    /// Any other non-success HTTP status.
    #[error("provider response error: status {status}")]
    Upstream { status: u16, body: String },

    /// The response body was not JSON.
    #[error("provider response parse failed: {0}")]
    MalformedResponse(String),
}

impl crate::error::ErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials { .. } => "E_MISSING_CREDENTIALS",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Transport(_) => "E_PROVIDER_TRANSPORT",
            Self::Unauthorized { .. } => "E_PROVIDER_UNAUTHORIZED",
            Self::RateLimited => "E_PROVIDER_RATE_LIMITED",
            Self::Upstream { .. } => "E_PROVIDER_UPSTREAM",
            Self::MalformedResponse(_) => "E_PROVIDER_MALFORMED",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::RateLimited | Self::Upstream { status: 500..=599, .. })
    }
}

/// Map a non-success HTTP status to its error class. `None` for 2xx.
#[must_use]
pub fn classify_status(status: u16, body: String) -> Option<ProviderError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(ProviderError::Unauthorized { status }),
        429 => Some(ProviderError::RateLimited),
        _ => Some(ProviderError::Upstream { status, body }),
    }
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Capability interface over an SEO data vendor. One implementation per
/// vendor; every method returns the vendor's response body unchanged.
#[async_trait::async_trait]
pub trait SeoDataProvider: Send + Sync {
    /// Human-readable vendor name for status displays.
    fn name(&self) -> &str;

    /// Related keyword ideas for a seed keyword. `location` defaults to the
    /// vendor's national market when `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the body is not JSON.
    async fn keyword_suggestions(&self, keyword: &str, location: Option<&str>) -> Result<Value, ProviderError>;

    /// Live organic SERP for a keyword in a location.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the body is not JSON.
    async fn local_pack_rankings(&self, keyword: &str, location: &str) -> Result<Value, ProviderError>;

    /// Domain rank overview for a competitor.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the body is not JSON.
    async fn competitor_overview(&self, domain: &str) -> Result<Value, ProviderError>;

    /// Search volume for a batch of keywords.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the body is not JSON.
    async fn search_volume(&self, keywords: &[String]) -> Result<Value, ProviderError>;

    /// Business listings matching a keyword in a location.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the body is not JSON.
    async fn local_business_listings(&self, keyword: &str, location: &str) -> Result<Value, ProviderError>;

    /// Lighthouse audit of a domain's home page.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the request fails or the body is not JSON.
    async fn site_audit(&self, domain: &str) -> Result<Value, ProviderError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
