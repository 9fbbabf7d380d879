//! Keyword research: mock generation, filtering, and sorting.
//!
//! DESIGN
//! ======
//! Research expands a seed keyword into five dealership-flavoured variants
//! with fixed volume/difficulty/CPC figures. The results view then filters
//! and sorts them on request; filtering is a pure function of the stored
//! run and the query string, so the stored run is never mutated.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{Intent, KeywordQuery, KeywordResult, Trend};
use crate::services::run::run_operation;
use crate::state::{AppState, KeywordRun, Loaded, PageError};

/// Shortcut seeds offered next to the research form.
pub const POPULAR_KEYWORDS: [&str; 6] =
    ["Honda dealer", "Toyota dealership", "Ford service", "Chevrolet parts", "used cars", "car financing"];

pub const DEFAULT_MIN_SEARCH_VOLUME: u32 = 100;
pub const DEFAULT_MAX_DIFFICULTY: u8 = 70;

// =============================================================================
// GENERATION
// =============================================================================

/// Expand a seed keyword into the five research variants.
#[must_use]
pub fn generate(seed: &str) -> Vec<KeywordResult> {
    let seed = seed.trim();
    let row = |keyword: String, search_volume: u32, difficulty: u8, cpc: f64, intent: Intent, trend: Trend| KeywordResult {
        keyword,
        search_volume,
        difficulty,
        cpc,
        intent,
        trend,
    };

    vec![
        row(format!("{seed} near me"), 2400, 45, 3.20, Intent::Local, Trend::Up),
        row(format!("{seed} dealership"), 1800, 52, 4.15, Intent::Commercial, Trend::Stable),
        row(format!("best {seed} dealer"), 1200, 38, 2.85, Intent::Commercial, Trend::Up),
        row(format!("{seed} service center"), 950, 35, 2.50, Intent::Local, Trend::Stable),
        row(format!("used {seed}"), 3200, 62, 1.95, Intent::Commercial, Trend::Up),
    ]
}

/// Validate the query, run the simulated research call, and store the run.
///
/// # Errors
///
/// Returns [`PageError::InvalidInput`] for a blank keyword, or the runner's
/// errors.
pub async fn research(state: &AppState, query: KeywordQuery) -> Result<Loaded<KeywordRun>, PageError> {
    let keyword = query.keyword.trim().to_owned();
    if keyword.is_empty() {
        return Err(PageError::InvalidInput("keyword is required".into()));
    }
    let query = KeywordQuery { keyword, location: query.location.trim().to_owned(), language: query.language };

    let loaded = run_operation(state.pages.clone(), state.delays.keywords, move || {
        let results = generate(&query.keyword);
        Ok(KeywordRun { query, results })
    })
    .await?;

    state.pages.clear_saved();
    Ok(loaded)
}

/// Toggle a keyword from the current run in the saved set. Returns whether
/// it is now saved.
///
/// # Errors
///
/// Returns [`PageError::InvalidInput`] if the keyword is not in the current
/// results.
pub fn toggle_saved(state: &AppState, keyword: &str) -> Result<bool, PageError> {
    let keyword = keyword.trim();
    let in_results = state
        .pages
        .keywords
        .data()
        .is_some_and(|run| run.results.iter().any(|r| r.keyword == keyword));
    if !in_results {
        return Err(PageError::InvalidInput(format!("\"{keyword}\" is not in the current results")));
    }
    Ok(state.pages.toggle_saved(keyword))
}

// =============================================================================
// FILTERING
// =============================================================================

/// Intent predicate: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntentFilter {
    #[default]
    All,
    Only(Intent),
}

impl IntentFilter {
    /// `"all"` or an intent wire name. Unknown values mean all.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok())
            .map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(intent) => intent.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, intent: Intent) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == intent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordFilter {
    pub min_search_volume: u32,
    pub max_difficulty: u8,
    pub intent: IntentFilter,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self {
            min_search_volume: DEFAULT_MIN_SEARCH_VOLUME,
            max_difficulty: DEFAULT_MAX_DIFFICULTY,
            intent: IntentFilter::All,
        }
    }
}

impl KeywordFilter {
    #[must_use]
    pub fn accepts(&self, result: &KeywordResult) -> bool {
        result.search_volume >= self.min_search_volume
            && result.difficulty <= self.max_difficulty
            && self.intent.matches(result.intent)
    }
}

// =============================================================================
// SORTING
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    SearchVolume,
    Difficulty,
    Cpc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::SearchVolume, SortKey::Difficulty, SortKey::Cpc];

    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("difficulty") => Self::Difficulty,
            Some("cpc") => Self::Cpc,
            _ => Self::SearchVolume,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SearchVolume => "searchVolume",
            Self::Difficulty => "difficulty",
            Self::Cpc => "cpc",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SearchVolume => "Search Volume",
            Self::Difficulty => "Difficulty",
            Self::Cpc => "CPC",
        }
    }

    fn compare(self, a: &KeywordResult, b: &KeywordResult) -> Ordering {
        match self {
            Self::SearchVolume => a.search_volume.cmp(&b.search_volume),
            Self::Difficulty => a.difficulty.cmp(&b.difficulty),
            Self::Cpc => a.cpc.total_cmp(&b.cpc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordSort {
    pub key: SortKey,
    pub order: SortOrder,
}

/// Filter then sort. Stable: equal keys keep generation order.
#[must_use]
pub fn apply(results: &[KeywordResult], filter: &KeywordFilter, sort: KeywordSort) -> Vec<KeywordResult> {
    let mut kept: Vec<KeywordResult> = results
        .iter()
        .filter(|r| filter.accepts(r))
        .cloned()
        .collect();
    kept.sort_by(|a, b| {
        let ord = sort.key.compare(a, b);
        match sort.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    kept
}

// =============================================================================
// QUERY PARAMS
// =============================================================================

/// Raw results-view query string. Every field is optional; bad numbers fall
/// back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsParams {
    pub min_search_volume: Option<String>,
    pub max_difficulty: Option<String>,
    pub intent: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ResultsParams {
    #[must_use]
    pub fn filter(&self) -> KeywordFilter {
        let defaults = KeywordFilter::default();
        KeywordFilter {
            min_search_volume: parse_or(self.min_search_volume.as_deref(), defaults.min_search_volume),
            max_difficulty: parse_or(self.max_difficulty.as_deref(), defaults.max_difficulty),
            intent: IntentFilter::parse(self.intent.as_deref()),
        }
    }

    #[must_use]
    pub fn sort(&self) -> KeywordSort {
        KeywordSort { key: SortKey::parse(self.sort_by.as_deref()), order: SortOrder::parse(self.sort_order.as_deref()) }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
