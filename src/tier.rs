//! Threshold-to-tier mapping for colour and icon selection.

use serde::Serialize;

use crate::model::Trend;

/// Severity tier. Ordered `Poor < Warning < Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Poor,
    Warning,
    Good,
}

impl Tier {
    /// Text + background classes for badges.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Good => "text-green-600 bg-green-50",
            Self::Warning => "text-yellow-600 bg-yellow-50",
            Self::Poor => "text-red-600 bg-red-50",
        }
    }

    /// Text-only class for inline figures.
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Good => "text-green-600",
            Self::Warning => "text-yellow-600",
            Self::Poor => "text-red-600",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Good => "check-circle",
            Self::Warning => "alert-triangle",
            Self::Poor => "x-circle",
        }
    }
}

/// Audit scores: `>= 90` good, `>= 70` warning.
#[must_use]
pub fn score_tier(score: f64) -> Tier {
    if score >= 90.0 {
        Tier::Good
    } else if score >= 70.0 {
        Tier::Warning
    } else {
        Tier::Poor
    }
}

/// SERP positions: top 3 good, first page warning.
#[must_use]
pub fn position_tier(position: f64) -> Tier {
    if position <= 3.0 {
        Tier::Good
    } else if position <= 10.0 {
        Tier::Warning
    } else {
        Tier::Poor
    }
}

/// Keyword difficulty: lower is better.
#[must_use]
pub fn difficulty_tier(difficulty: f64) -> Tier {
    if difficulty < 30.0 {
        Tier::Good
    } else if difficulty < 60.0 {
        Tier::Warning
    } else {
        Tier::Poor
    }
}

/// Competitor visibility share in `[0, 1]`.
#[must_use]
pub fn visibility_tier(visibility: f64) -> Tier {
    if visibility >= 0.7 {
        Tier::Good
    } else if visibility >= 0.4 {
        Tier::Warning
    } else {
        Tier::Poor
    }
}

#[must_use]
pub fn trend_tier(trend: Trend) -> Tier {
    match trend {
        Trend::Up => Tier::Good,
        Trend::Stable => Tier::Warning,
        Trend::Down => Tier::Poor,
    }
}

#[cfg(test)]
#[path = "tier_test.rs"]
mod tests;
