//! Competitor analysis page.

use leptos::prelude::*;

use super::{EmptyState, PageHeader, StatTile, StatusBanner, failure_of};
use crate::model::{CompetitorRecord, CompetitorReport};
use crate::services::competitors::{MAX_DOMAINS, POPULAR_COMPETITORS};
use crate::services::dashboard::group_thousands;
use crate::state::PageState;
use crate::tier::{position_tier, visibility_tier};

#[component]
pub fn CompetitorsPage(state: PageState<CompetitorReport>, notice: Option<String>) -> impl IntoView {
    let loading = state.is_loading();
    let failure = failure_of(&state);
    let report = state.data().cloned();
    let submitted = report
        .as_ref()
        .map(|r| r.competitors.iter().map(|c| c.domain.as_str()).collect::<Vec<_>>().join("\n"))
        .unwrap_or_default();

    let summary = report.as_ref().and_then(|r| r.summary).map(|s| {
        view! {
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatTile label="Avg Keywords" value=group_thousands(u64::from(s.avg_keywords))/>
                <StatTile label="Avg Traffic" value=group_thousands(u64::from(s.avg_traffic)) accent="bg-green-50 text-green-600"/>
                <StatTile label="Avg Position" value=format!("{:.1}", s.avg_position) accent="bg-purple-50 text-purple-600"/>
                <StatTile label="Common Keywords" value=s.total_common.to_string() accent="bg-orange-50 text-orange-600"/>
            </div>
        }
    });

    let results = match report {
        Some(report) if !report.competitors.is_empty() => {
            let cards = report.competitors.clone().into_iter().map(|c| view! { <CompetitorCard record=c/> }).collect_view();
            view! { <div class="space-y-6">{cards}</div> }.into_any()
        }
        _ => view! {
            <EmptyState title="Analyze Your Competitors" message="Enter competitor domains to discover their SEO strategies"/>
        }
        .into_any(),
    };

    view! {
        <PageHeader title="Competitor Analysis" subtitle="Analyze competing dealerships and discover opportunities"/>
        <StatusBanner loading=loading failure=failure notice=notice/>
        {summary}
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            <div class="lg:col-span-1"><CompetitorForm domains=submitted loading=loading/></div>
            <div class="lg:col-span-3">{results}</div>
        </div>
    }
}

#[component]
fn CompetitorForm(domains: String, loading: bool) -> impl IntoView {
    let popular = POPULAR_COMPETITORS
        .into_iter()
        .map(|domain| view! {
            <form method="post" action="/competitors">
                <input type="hidden" name="domains" value=domain/>
                <button type="submit" class="w-full text-left px-3 py-2 text-sm bg-gray-50 rounded-lg popular-competitor" disabled=loading>{domain}</button>
            </form>
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="font-semibold text-gray-900 mb-4">"Competitor Analysis"</h3>
            <form method="post" action="/competitors" class="space-y-4 competitor-form">
                <label class="block text-sm font-medium text-gray-700">"Competitor Domains"
                    <textarea name="domains" rows="5" placeholder="e.g., competitor-dealer.com">{domains}</textarea>
                </label>
                <p class="text-xs text-gray-500">{format!("One per line, up to {MAX_DOMAINS}.")}</p>
                <button type="submit" class="w-full bg-blue-600 text-white py-3 rounded-lg" disabled=loading>
                    {if loading { "Analyzing..." } else { "Analyze Competitors" }}
                </button>
            </form>
            <div class="mt-6">
                <h4 class="text-sm font-medium text-gray-700 mb-3">"Popular Competitors"</h4>
                <div class="space-y-2">{popular}</div>
            </div>
        </div>
    }
}

#[component]
fn CompetitorCard(record: CompetitorRecord) -> impl IntoView {
    let visibility_class = visibility_tier(record.visibility).badge_class();
    let position_class = position_tier(record.avg_position).text_class();
    let keywords = record
        .top_keywords
        .into_iter()
        .map(|k| view! { <span class="px-2 py-1 text-xs bg-blue-50 text-blue-700 rounded-full">{k}</span> })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 competitor-card">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-gray-900">{record.domain}</h3>
                <span class=format!("px-3 py-1 rounded-full text-sm font-medium {visibility_class}")>
                    {format!("{:.0}% visibility", record.visibility * 100.0)}
                </span>
            </div>
            <dl class="grid grid-cols-2 md:grid-cols-5 gap-4 text-sm">
                <div><dt>"Organic Keywords"</dt><dd>{group_thousands(u64::from(record.organic_keywords))}</dd></div>
                <div><dt>"Organic Traffic"</dt><dd>{group_thousands(u64::from(record.organic_traffic))}</dd></div>
                <div><dt>"Avg Position"</dt><dd class=position_class>{format!("{:.1}", record.avg_position)}</dd></div>
                <div><dt>"Local Pack"</dt><dd>{record.local_pack_appearances.to_string()}</dd></div>
                <div><dt>"Common Keywords"</dt><dd>{record.common_keywords.to_string()}</dd></div>
            </dl>
            <div class="mt-4 flex flex-wrap gap-2">{keywords}</div>
        </div>
    }
}
