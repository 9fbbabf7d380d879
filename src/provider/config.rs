//! DataForSEO configuration parsed from environment variables.

use super::types::ProviderError;
use crate::config::env_parse;

pub const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com/v3";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ProviderTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct DataForSeoConfig {
    pub login: String,
    pub password: String,
    pub base_url: String,
    pub timeouts: ProviderTimeouts,
}

impl std::fmt::Debug for DataForSeoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataForSeoConfig")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl DataForSeoConfig {
    /// Build typed provider config from environment variables.
    ///
    /// Required:
    /// - `DATAFORSEO_LOGIN`
    /// - `DATAFORSEO_PASSWORD`
    ///
    /// Optional:
    /// - `DATAFORSEO_BASE_URL`: default `https://api.dataforseo.com/v3`
    /// - `DATAFORSEO_REQUEST_TIMEOUT_SECS`: default 60
    /// - `DATAFORSEO_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingCredentials`] when either credential is
    /// unset or blank.
    pub fn from_env() -> Result<Self, ProviderError> {
        let login = required_var("DATAFORSEO_LOGIN")?;
        let password = required_var("DATAFORSEO_PASSWORD")?;
        let base_url = std::env::var("DATAFORSEO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = ProviderTimeouts {
            request_secs: env_parse("DATAFORSEO_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("DATAFORSEO_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { login, password, base_url, timeouts })
    }
}

fn required_var(key: &str) -> Result<String, ProviderError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ProviderError::MissingCredentials { var: key.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
