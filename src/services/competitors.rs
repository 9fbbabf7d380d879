//! Competitor analysis.
//!
//! DESIGN
//! ======
//! One record per submitted domain, in submission order. Every metric is a
//! sampler draw; top keywords are derived from the domain's brand part
//! (everything before the first dot).

use crate::model::{CompetitorRecord, CompetitorReport, CompetitorSummary};
use crate::sampler::{Sampler, float_in, int_in, round_to};
use crate::services::run::run_operation;
use crate::state::{AppState, Loaded, PageError};

pub const POPULAR_COMPETITORS: [&str; 5] = ["autonation.com", "carmax.com", "carvana.com", "vroom.com", "cars.com"];

/// Most domains accepted in one analysis.
pub const MAX_DOMAINS: usize = 5;

/// Split free text on newlines and commas, dropping blanks.
#[must_use]
pub fn parse_domains(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Domain up to its first `.`.
#[must_use]
pub fn brand(domain: &str) -> &str {
    domain.split('.').next().unwrap_or(domain)
}

fn record(domain: &str, sampler: &dyn Sampler) -> CompetitorRecord {
    let b = brand(domain);
    CompetitorRecord {
        domain: domain.to_owned(),
        organic_keywords: int_in(sampler, 1000, 5000),
        organic_traffic: int_in(sampler, 10_000, 50_000),
        avg_position: float_in(sampler, 5.0, 15.0, 1),
        local_pack_appearances: int_in(sampler, 20, 50),
        common_keywords: int_in(sampler, 50, 200),
        visibility: float_in(sampler, 0.2, 0.8, 2),
        top_keywords: vec![
            format!("{b} dealer"),
            format!("{b} service"),
            format!("used cars {b}"),
            format!("{b} parts"),
            format!("{b} financing"),
        ],
    }
}

/// Analyze each non-blank domain in order.
#[must_use]
pub fn analyze(domains: &[String], sampler: &dyn Sampler) -> Vec<CompetitorRecord> {
    domains
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(|d| record(d, sampler))
        .collect()
}

/// Averages across `competitors`; `None` when there are none.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn summary(competitors: &[CompetitorRecord]) -> Option<CompetitorSummary> {
    if competitors.is_empty() {
        return None;
    }
    let n = competitors.len() as u64;
    let keywords: u64 = competitors.iter().map(|c| u64::from(c.organic_keywords)).sum();
    let traffic: u64 = competitors.iter().map(|c| u64::from(c.organic_traffic)).sum();
    let position: f64 = competitors.iter().map(|c| c.avg_position).sum();

    Some(CompetitorSummary {
        avg_keywords: u32::try_from(keywords / n).unwrap_or(u32::MAX),
        avg_traffic: u32::try_from(traffic / n).unwrap_or(u32::MAX),
        avg_position: round_to(position / n as f64, 1),
        total_common: competitors.iter().map(|c| c.common_keywords).sum(),
    })
}

#[must_use]
pub fn report(domains: &[String], sampler: &dyn Sampler) -> CompetitorReport {
    let competitors = analyze(domains, sampler);
    let summary = summary(&competitors);
    CompetitorReport { competitors, summary }
}

/// Validate and analyze `domains`, replacing the page's current report.
///
/// # Errors
///
/// Returns [`PageError::InvalidInput`] when no domain is left after
/// trimming or more than [`MAX_DOMAINS`] are given, or the runner's errors.
pub async fn analyze_domains(state: &AppState, domains: Vec<String>) -> Result<Loaded<CompetitorReport>, PageError> {
    let domains: Vec<String> = domains
        .into_iter()
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty())
        .collect();
    if domains.is_empty() {
        return Err(PageError::InvalidInput("at least one competitor domain is required".into()));
    }
    if domains.len() > MAX_DOMAINS {
        return Err(PageError::InvalidInput(format!("at most {MAX_DOMAINS} competitor domains per analysis")));
    }

    let sampler = state.sampler.clone();
    run_operation(state.pages.clone(), state.delays.competitors, move || Ok(report(&domains, sampler.as_ref()))).await
}

#[cfg(test)]
#[path = "competitors_test.rs"]
mod tests;
