//! Site audit.

use crate::model::{AuditReport, IssueSection, LocalSeoAudit, PerformanceAudit};
use crate::sampler::{Sampler, float_in, int_in};
use crate::services::run::run_operation;
use crate::state::{AppState, Loaded, PageError};

pub const SEO_ISSUES: [&str; 4] = [
    "Missing meta descriptions on 12 pages",
    "Duplicate title tags found",
    "Images missing alt text",
    "Internal linking could be improved",
];

pub const ACCESSIBILITY_ISSUES: [&str; 3] =
    ["Low contrast text detected", "Missing ARIA labels", "Keyboard navigation issues"];

pub const TECHNICAL_ISSUES: [&str; 3] =
    ["Some images not optimized", "JavaScript bundles could be smaller", "Missing structured data"];

/// Score in `70..100`.
fn score(sampler: &dyn Sampler) -> u32 {
    int_in(sampler, 70, 30)
}

fn section(sampler: &dyn Sampler, issues: &[&str]) -> IssueSection {
    IssueSection { score: score(sampler), issues: issues.iter().map(|&i| i.to_owned()).collect() }
}

/// Generate an audit for `domain`.
#[must_use]
pub fn generate(domain: &str, sampler: &dyn Sampler) -> AuditReport {
    AuditReport {
        domain: domain.trim().to_owned(),
        score: score(sampler),
        performance: PerformanceAudit {
            score: score(sampler),
            first_contentful_paint: float_in(sampler, 1.0, 2.0, 1),
            largest_contentful_paint: float_in(sampler, 2.0, 3.0, 1),
            cumulative_layout_shift: float_in(sampler, 0.0, 0.2, 3),
        },
        seo: section(sampler, &SEO_ISSUES),
        accessibility: section(sampler, &ACCESSIBILITY_ISSUES),
        technical: section(sampler, &TECHNICAL_ISSUES),
        local_seo: LocalSeoAudit {
            score: score(sampler),
            gmb: true,
            nap: false,
            local_keywords: true,
            reviews: 4.2,
            citations: 145,
        },
    }
}

/// Validate `domain` and run the audit, replacing the page's current report.
///
/// # Errors
///
/// Returns [`PageError::InvalidInput`] for a blank domain, or the runner's
/// errors.
pub async fn audit_domain(state: &AppState, domain: &str) -> Result<Loaded<AuditReport>, PageError> {
    let domain = domain.trim().to_owned();
    if domain.is_empty() {
        return Err(PageError::InvalidInput("domain is required".into()));
    }
    let sampler = state.sampler.clone();
    run_operation(state.pages.clone(), state.delays.audit, move || Ok(generate(&domain, sampler.as_ref()))).await
}

#[cfg(test)]
#[path = "audit_test.rs"]
mod tests;
