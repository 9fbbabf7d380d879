//! Report entities.
//!
//! DESIGN
//! ======
//! Every record here is transient: produced wholesale by one generator run,
//! held in a page slot, and replaced by the next run. Wire names are
//! camelCase so the JSON API matches the dashboard's original field names.

use serde::{Deserialize, Serialize};

// =============================================================================
// KEYWORDS
// =============================================================================

/// Search intent of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Local,
    Commercial,
    Informational,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::Local, Intent::Commercial, Intent::Informational];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Commercial => "commercial",
            Self::Informational => "informational",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Commercial => "Commercial",
            Self::Informational => "Informational",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intent: {0}")]
pub struct UnknownIntent(pub String);

impl std::str::FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "local" => Ok(Self::Local),
            "commercial" => Ok(Self::Commercial),
            "informational" => Ok(Self::Informational),
            _ => Err(UnknownIntent(raw.to_owned())),
        }
    }
}

/// Direction of a keyword's search volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

/// One keyword research result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    pub keyword: String,
    pub search_volume: u32,
    /// 0..=100.
    pub difficulty: u8,
    pub cpc: f64,
    pub intent: Intent,
    pub trend: Trend,
}

/// Keyword research form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "English".to_owned()
}

// =============================================================================
// RANKINGS
// =============================================================================

/// Tracked keyword position for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRecord {
    pub keyword: String,
    pub current_position: u32,
    pub previous_position: u32,
    pub local_pack: bool,
    pub url: String,
    pub search_volume: u32,
}

/// Eight-day position series for one keyword, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingHistory {
    pub keyword: String,
    pub points: Vec<u32>,
}

/// Aggregate figures shown above the rankings table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingSummary {
    pub average_position: f64,
    pub local_pack_count: usize,
    pub improved: usize,
    pub total: usize,
}

/// One rankings load: records, history, and summary for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub location: String,
    pub rankings: Vec<RankingRecord>,
    pub history: Vec<RankingHistory>,
    pub summary: RankingSummary,
}

// =============================================================================
// COMPETITORS
// =============================================================================

/// Analysis of one competing domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    pub domain: String,
    pub organic_keywords: u32,
    pub organic_traffic: u32,
    pub avg_position: f64,
    pub local_pack_appearances: u32,
    pub common_keywords: u32,
    /// 0.20..=1.00, two decimals.
    pub visibility: f64,
    pub top_keywords: Vec<String>,
}

/// Averages across an analysed competitor set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorSummary {
    pub avg_keywords: u32,
    pub avg_traffic: u32,
    pub avg_position: f64,
    pub total_common: u32,
}

/// One competitor analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorReport {
    pub competitors: Vec<CompetitorRecord>,
    pub summary: Option<CompetitorSummary>,
}

// =============================================================================
// AUDIT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAudit {
    pub score: u32,
    /// Seconds.
    pub first_contentful_paint: f64,
    /// Seconds.
    pub largest_contentful_paint: f64,
    pub cumulative_layout_shift: f64,
}

/// A scored audit category with its findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSection {
    pub score: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSeoAudit {
    pub score: u32,
    /// Google Business Profile claimed.
    pub gmb: bool,
    /// Name/address/phone consistent across listings.
    pub nap: bool,
    pub local_keywords: bool,
    pub reviews: f64,
    pub citations: u32,
}

/// Full site audit for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub domain: String,
    pub score: u32,
    pub performance: PerformanceAudit,
    pub seo: IssueSection,
    pub accessibility: IssueSection,
    pub technical: IssueSection,
    pub local_seo: LocalSeoAudit,
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
