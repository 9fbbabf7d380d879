//! Dashboard overview.
//!
//! DESIGN
//! ======
//! The dashboard is a fixed snapshot: four stat cards, a twelve-month
//! performance series, a recent-activity feed, and quick links to the work
//! pages. Loading it still goes through the page runner so it shows the
//! same loading and failure states as every other page.

use serde::Serialize;
use time::Duration;

use crate::services::run::run_operation;
use crate::state::{AppState, Loaded, PageError};

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

impl ChangeType {
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Positive => "text-green-600",
            Self::Negative => "text-red-600",
            Self::Neutral => "text-gray-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub change_type: ChangeType,
}

/// Twelve monthly points per series, January first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSeries {
    pub months: Vec<&'static str>,
    pub average_position: Vec<f64>,
    pub local_pack_appearances: Vec<u32>,
    pub organic_traffic: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    RankingImprovement,
    NewKeyword,
    LocalPack,
    RankingDrop,
    Competitor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub performance: PerformanceSeries,
    pub activity: Vec<Activity>,
    pub quick_actions: Vec<QuickAction>,
}

// =============================================================================
// FORMATTING
// =============================================================================

/// `15420` → `"15,420"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"2 hours ago"`, `"1 day ago"`. Sub-hour ages read `"just now"`.
#[must_use]
pub fn relative_time(age: Duration) -> String {
    let (count, unit) = if age.whole_days() > 0 {
        (age.whole_days(), "day")
    } else if age.whole_hours() > 0 {
        (age.whole_hours(), "hour")
    } else {
        return "just now".to_owned();
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

// =============================================================================
// GENERATION
// =============================================================================

#[must_use]
pub fn stats() -> Vec<StatCard> {
    let card = |title, value: String, change| StatCard { title, value, change, change_type: ChangeType::Positive };
    vec![
        card("Total Keywords", group_thousands(247), "+12%"),
        card("Local Rankings", group_thousands(89), "+8%"),
        card("Avg Position", format!("{:.1}", 12.4), "-2.1"),
        card("Monthly Traffic", group_thousands(15_420), "+23%"),
    ]
}

#[must_use]
pub fn performance() -> PerformanceSeries {
    PerformanceSeries {
        months: MONTHS.to_vec(),
        average_position: vec![15.2, 14.8, 13.5, 12.9, 12.1, 11.8, 11.2, 10.9, 10.5, 10.1, 9.8, 9.4],
        local_pack_appearances: vec![45, 52, 58, 64, 71, 78, 85, 89, 94, 98, 102, 108],
        organic_traffic: vec![8500, 9200, 10_100, 11_200, 12_300, 13_100, 13_800, 14_200, 14_800, 15_100, 15_400, 15_800],
    }
}

#[must_use]
pub fn activity() -> Vec<Activity> {
    let entry = |kind, message: &str, age| Activity { kind, message: message.to_owned(), time: relative_time(age) };
    vec![
        entry(
            ActivityKind::RankingImprovement,
            "Keyword \"Honda dealer near me\" improved to position 3",
            Duration::hours(2),
        ),
        entry(ActivityKind::NewKeyword, "Added 15 new local keywords to tracking", Duration::hours(4)),
        entry(ActivityKind::LocalPack, "Appeared in local pack for \"Toyota dealership\"", Duration::hours(6)),
        entry(ActivityKind::RankingDrop, "Keyword \"used cars\" dropped to position 8", Duration::days(1)),
        entry(ActivityKind::Competitor, "Competitor analysis completed for 5 dealers", Duration::days(2)),
    ]
}

#[must_use]
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction { title: "Research Keywords", description: "Find local SEO opportunities", href: "/keywords" },
        QuickAction { title: "Check Rankings", description: "Monitor local search positions", href: "/rankings" },
        QuickAction { title: "Analyze Competitors", description: "Compare with local dealers", href: "/competitors" },
        QuickAction { title: "Site Audit", description: "Technical SEO analysis", href: "/audit" },
    ]
}

#[must_use]
pub fn generate() -> DashboardData {
    DashboardData { stats: stats(), performance: performance(), activity: activity(), quick_actions: quick_actions() }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Reload the dashboard snapshot.
///
/// # Errors
///
/// Returns the runner's errors.
pub async fn refresh(state: &AppState) -> Result<Loaded<DashboardData>, PageError> {
    run_operation(state.pages.clone(), state.delays.dashboard, || Ok(generate())).await
}

/// Load the dashboard on first visit; later visits reuse the stored snapshot.
///
/// # Errors
///
/// Returns [`PageError::TaskFailed`] if the load fails.
pub async fn ensure_loaded(state: &AppState) -> Result<(), PageError> {
    let slot = &state.pages.dashboard;
    if slot.data().is_some() || slot.is_loading() {
        return Ok(());
    }
    match refresh(state).await {
        Ok(_) | Err(PageError::AlreadyLoading) => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
