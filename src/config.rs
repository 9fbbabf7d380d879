//! Application configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_DASHBOARD_DELAY_MS: u64 = 1000;
const DEFAULT_KEYWORDS_DELAY_MS: u64 = 2000;
const DEFAULT_RANKINGS_DELAY_MS: u64 = 1500;
const DEFAULT_COMPETITORS_DELAY_MS: u64 = 2500;
const DEFAULT_AUDIT_DELAY_MS: u64 = 3000;

/// How long each page's simulated API call takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelays {
    pub dashboard: Duration,
    pub keywords: Duration,
    pub rankings: Duration,
    pub competitors: Duration,
    pub audit: Duration,
}

impl SimulatedDelays {
    /// The same delay for every page.
    #[must_use]
    pub fn uniform(delay: Duration) -> Self {
        Self { dashboard: delay, keywords: delay, rankings: delay, competitors: delay, audit: delay }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self {
            dashboard: Duration::from_millis(DEFAULT_DASHBOARD_DELAY_MS),
            keywords: Duration::from_millis(DEFAULT_KEYWORDS_DELAY_MS),
            rankings: Duration::from_millis(DEFAULT_RANKINGS_DELAY_MS),
            competitors: Duration::from_millis(DEFAULT_COMPETITORS_DELAY_MS),
            audit: Duration::from_millis(DEFAULT_AUDIT_DELAY_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub delays: SimulatedDelays,
    /// Seeds the sampler when set; thread randomness otherwise.
    pub mock_seed: Option<u64>,
}

impl AppConfig {
    /// Build typed app config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SIMULATED_DELAY_MS`: overrides every page's delay
    /// - `MOCK_SEED`: fixed sampler seed
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let delays = std::env::var("SIMULATED_DELAY_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map_or_else(SimulatedDelays::default, |ms| SimulatedDelays::uniform(Duration::from_millis(ms)));
        let mock_seed = std::env::var("MOCK_SEED")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok());

        Self { port: env_parse("PORT", DEFAULT_PORT), delays, mock_seed }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
