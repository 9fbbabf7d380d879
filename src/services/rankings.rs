//! Local rankings: tracked keyword positions per metro location.
//!
//! DESIGN
//! ======
//! The five tracked keywords and their positions are fixed; only the
//! "used cars" keyword follows the selected location. The eight-day history
//! series is the random part and is drawn from the injected sampler so a
//! scripted sampler yields an exact series.

use crate::model::{RankingHistory, RankingRecord, RankingReport, RankingSummary};
use crate::sampler::{Sampler, round_to};
use crate::services::run::run_operation;
use crate::state::{AppState, Loaded, PageError};

pub const DEFAULT_LOCATION: &str = "Los Angeles, CA";

pub const SUPPORTED_LOCATIONS: [&str; 10] = [
    "Los Angeles, CA",
    "New York, NY",
    "Chicago, IL",
    "Houston, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "San Antonio, TX",
    "San Diego, CA",
    "Dallas, TX",
    "San Jose, CA",
];

/// X-axis labels for the history series, oldest first.
pub const HISTORY_LABELS: [&str; 8] =
    ["7 days ago", "6 days ago", "5 days ago", "4 days ago", "3 days ago", "2 days ago", "Yesterday", "Today"];

/// Keywords charted with history.
const HISTORY_KEYWORDS: usize = 5;

const MIN_POSITION: i64 = 1;
const MAX_POSITION: i64 = 20;

// =============================================================================
// GENERATION
// =============================================================================

/// City part of a `"City, ST"` location.
#[must_use]
pub fn city(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

/// Normalize a requested location. Blank means the default.
#[must_use]
pub fn resolve_location(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(location) if !location.is_empty() => location.to_owned(),
        _ => DEFAULT_LOCATION.to_owned(),
    }
}

#[must_use]
pub fn records(location: &str) -> Vec<RankingRecord> {
    let row = |keyword: String, current_position: u32, previous_position: u32, local_pack: bool, path: &str, search_volume: u32| {
        RankingRecord {
            keyword,
            current_position,
            previous_position,
            local_pack,
            url: format!("https://yourdealership.com/{path}"),
            search_volume,
        }
    };

    vec![
        row("Honda dealer near me".into(), 3, 5, true, "honda", 2400),
        row("Toyota dealership".into(), 7, 8, false, "toyota", 1800),
        row(format!("used cars {}", city(location)), 12, 10, false, "used", 3200),
        row("car service center".into(), 2, 2, true, "service", 950),
        row("auto financing".into(), 15, 18, false, "financing", 1200),
    ]
}

/// Eight positions ending at `current`, each within `1..=20`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn history_points(current: u32, sampler: &dyn Sampler) -> Vec<u32> {
    let start_jitter = (sampler.next_unit() * 5.0).floor() as i64 - 2;
    let mut position = i64::from(current) + start_jitter;
    let mut points = Vec::with_capacity(HISTORY_LABELS.len());

    for _ in 0..HISTORY_LABELS.len() {
        let step = (sampler.next_unit() - 0.5) * 2.0;
        position = ((position as f64) + step).round() as i64;
        position = position.clamp(MIN_POSITION, MAX_POSITION);
        points.push(u32::try_from(position).unwrap_or(1));
    }

    if let Some(last) = points.last_mut() {
        *last = current;
    }
    points
}

#[must_use]
pub fn history(rankings: &[RankingRecord], sampler: &dyn Sampler) -> Vec<RankingHistory> {
    rankings
        .iter()
        .take(HISTORY_KEYWORDS)
        .map(|r| RankingHistory { keyword: r.keyword.clone(), points: history_points(r.current_position, sampler) })
        .collect()
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(rankings: &[RankingRecord]) -> RankingSummary {
    let total = rankings.len();
    let average_position = if total == 0 {
        0.0
    } else {
        let sum: u32 = rankings.iter().map(|r| r.current_position).sum();
        round_to(f64::from(sum) / total as f64, 1)
    };

    RankingSummary {
        average_position,
        local_pack_count: rankings.iter().filter(|r| r.local_pack).count(),
        improved: rankings.iter().filter(|r| r.current_position < r.previous_position).count(),
        total,
    }
}

/// Build a full report for `location`.
#[must_use]
pub fn report(location: &str, sampler: &dyn Sampler) -> RankingReport {
    let rankings = records(location);
    let history = history(&rankings, sampler);
    let summary = summarize(&rankings);
    RankingReport { location: location.to_owned(), rankings, history, summary }
}

// =============================================================================
// POSITION CHANGE
// =============================================================================

/// Movement between two checks. Lower positions are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionChange {
    Improved(u32),
    Declined(u32),
    Unchanged,
}

impl PositionChange {
    #[must_use]
    pub fn of(record: &RankingRecord) -> Self {
        let (current, previous) = (record.current_position, record.previous_position);
        match previous.cmp(&current) {
            std::cmp::Ordering::Greater => Self::Improved(previous - current),
            std::cmp::Ordering::Less => Self::Declined(current - previous),
            std::cmp::Ordering::Equal => Self::Unchanged,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Improved(n) => format!("+{n}"),
            Self::Declined(n) => format!("-{n}"),
            Self::Unchanged => "0".to_owned(),
        }
    }

    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Improved(_) => "text-green-600",
            Self::Declined(_) => "text-red-600",
            Self::Unchanged => "text-gray-600",
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Load rankings for `location`, replacing the page's current report.
///
/// # Errors
///
/// Returns the runner's errors.
pub async fn refresh(state: &AppState, location: &str) -> Result<Loaded<RankingReport>, PageError> {
    let location = resolve_location(Some(location));
    let sampler = state.sampler.clone();
    run_operation(state.pages.clone(), state.delays.rankings, move || Ok(report(&location, sampler.as_ref()))).await
}

/// Load rankings unless the current report already covers `location`.
///
/// Returns `None` when nothing needed loading or another load is in flight.
///
/// # Errors
///
/// Returns [`PageError::TaskFailed`] if the load fails.
pub async fn ensure_for_location(state: &AppState, location: &str) -> Result<Option<Loaded<RankingReport>>, PageError> {
    let location = resolve_location(Some(location));
    let current = state.pages.rankings.data();
    if current.is_some_and(|report| report.location == location) || state.pages.rankings.is_loading() {
        return Ok(None);
    }
    match refresh(state, &location).await {
        Ok(loaded) => Ok(Some(loaded)),
        Err(PageError::AlreadyLoading) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "rankings_test.rs"]
mod tests;
