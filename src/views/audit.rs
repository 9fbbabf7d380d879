//! Site audit page.

use leptos::prelude::*;

use super::{EmptyState, PageHeader, StatusBanner, failure_of};
use crate::model::{AuditReport, IssueSection, LocalSeoAudit, PerformanceAudit};
use crate::state::PageState;
use crate::tier::score_tier;

#[component]
pub fn AuditPage(state: PageState<AuditReport>, notice: Option<String>) -> impl IntoView {
    let loading = state.is_loading();
    let failure = failure_of(&state);
    let report = state.data().map(|r| (**r).clone());
    let domain = report.as_ref().map(|r| r.domain.clone()).unwrap_or_default();

    let (scores, details) = match report {
        Some(report) => (
            Some(view! {
                <div class="grid grid-cols-1 md:grid-cols-5 gap-6">
                    <ScoreTile label="Overall Score" score=report.score/>
                    <ScoreTile label="Performance" score=report.performance.score/>
                    <ScoreTile label="SEO" score=report.seo.score/>
                    <ScoreTile label="Accessibility" score=report.accessibility.score/>
                    <ScoreTile label="Local SEO" score=report.local_seo.score/>
                </div>
            }),
            view! {
                <div class="space-y-6">
                    <PerformancePanel performance=report.performance/>
                    <IssuePanel title="SEO" section=report.seo/>
                    <IssuePanel title="Accessibility" section=report.accessibility/>
                    <IssuePanel title="Technical" section=report.technical/>
                    <LocalSeoPanel local=report.local_seo/>
                </div>
            }
            .into_any(),
        ),
        None => (
            None,
            view! { <EmptyState title="Run Site Audit" message="Enter your domain to get a comprehensive SEO analysis"/> }.into_any(),
        ),
    };

    view! {
        <PageHeader title="Site Audit" subtitle="Comprehensive technical and local SEO analysis"/>
        <StatusBanner loading=loading failure=failure notice=notice/>
        {scores}
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            <div class="lg:col-span-1">
                <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                    <h3 class="font-semibold text-gray-900 mb-4">"Site Audit"</h3>
                    <form method="post" action="/audit" class="space-y-4 audit-form">
                        <label class="block text-sm font-medium text-gray-700">"Website Domain"
                            <input type="text" name="domain" required=true placeholder="e.g., yourdealership.com" value=domain/>
                        </label>
                        <button type="submit" class="w-full bg-blue-600 text-white py-3 rounded-lg" disabled=loading>
                            {if loading { "Auditing..." } else { "Run Audit" }}
                        </button>
                    </form>
                </div>
            </div>
            <div class="lg:col-span-3">{details}</div>
        </div>
    }
}

#[component]
fn ScoreTile(label: &'static str, score: u32) -> impl IntoView {
    let tier = score_tier(f64::from(score));
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 score-tile">
            <p class="text-sm font-medium text-gray-600">{label}</p>
            <p class="text-2xl font-bold text-gray-900 mt-1">{score.to_string()}</p>
            <span class=format!("p-3 rounded-lg icon-{} {}", tier.icon(), tier.badge_class())></span>
        </div>
    }
}

#[component]
fn PerformancePanel(performance: PerformanceAudit) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Performance"</h3>
            <dl class="grid grid-cols-3 gap-4 text-sm">
                <div><dt>"First Contentful Paint"</dt><dd>{format!("{:.1}s", performance.first_contentful_paint)}</dd></div>
                <div><dt>"Largest Contentful Paint"</dt><dd>{format!("{:.1}s", performance.largest_contentful_paint)}</dd></div>
                <div><dt>"Cumulative Layout Shift"</dt><dd>{format!("{:.3}", performance.cumulative_layout_shift)}</dd></div>
            </dl>
        </div>
    }
}

#[component]
fn IssuePanel(title: &'static str, section: IssueSection) -> impl IntoView {
    let class = score_tier(f64::from(section.score)).text_class();
    let issues = section.issues.into_iter().map(|issue| view! { <li class="issue">{issue}</li> }).collect_view();
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                <span class=format!("font-bold {class}")>{section.score.to_string()}</span>
            </div>
            <ul class="list-disc pl-5 space-y-1 text-sm text-gray-700">{issues}</ul>
        </div>
    }
}

#[component]
fn LocalSeoPanel(local: LocalSeoAudit) -> impl IntoView {
    let check = |ok: bool| if ok { "Yes" } else { "No" };
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Local SEO"</h3>
            <dl class="grid grid-cols-2 md:grid-cols-5 gap-4 text-sm local-seo">
                <div><dt>"Google Business Profile"</dt><dd>{check(local.gmb)}</dd></div>
                <div><dt>"NAP Consistency"</dt><dd>{check(local.nap)}</dd></div>
                <div><dt>"Local Keywords"</dt><dd>{check(local.local_keywords)}</dd></div>
                <div><dt>"Average Rating"</dt><dd>{format!("{:.1}", local.reviews)}</dd></div>
                <div><dt>"Citations"</dt><dd>{local.citations.to_string()}</dd></div>
            </dl>
        </div>
    }
}
