//! Provider: SEO data vendor integration point.
//!
//! DESIGN
//! ======
//! `SeoDataProvider` is the capability the rest of the app sees; vendors
//! implement it. The only vendor today is DataForSEO, configured from
//! environment variables. A missing credential disables the provider
//! rather than failing startup.

pub mod config;
pub mod dataforseo;
pub mod types;

use std::sync::Arc;

use config::DataForSeoConfig;
pub use types::{ProviderError, SeoDataProvider};

/// Build the configured provider from environment variables.
///
/// # Errors
///
/// Returns an error if credentials are missing or the HTTP client fails.
pub fn from_env() -> Result<Arc<dyn SeoDataProvider>, ProviderError> {
    let config = DataForSeoConfig::from_env()?;
    let client = dataforseo::DataForSeoClient::new(config)?;
    Ok(Arc::new(client))
}
