//! Local rankings page.

use leptos::prelude::*;

use super::{EmptyState, PageHeader, StatTile, StatusBanner, failure_of};
use crate::model::{RankingHistory, RankingRecord, RankingReport};
use crate::services::dashboard::group_thousands;
use crate::services::rankings::{HISTORY_LABELS, PositionChange, SUPPORTED_LOCATIONS};
use crate::state::PageState;
use crate::tier::position_tier;

#[component]
pub fn RankingsPage(state: PageState<RankingReport>, location: String, notice: Option<String>) -> impl IntoView {
    let loading = state.is_loading();
    let failure = failure_of(&state);

    let body = match state.data().cloned() {
        Some(report) => {
            let report = (*report).clone();
            let s = report.summary;
            view! {
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    <StatTile label="Average Position" value=format!("{:.1}", s.average_position)/>
                    <StatTile label="Local Pack" value=s.local_pack_count.to_string() accent="bg-green-50 text-green-600"/>
                    <StatTile label="Improved" value=s.improved.to_string() accent="bg-purple-50 text-purple-600"/>
                    <StatTile label="Total Keywords" value=s.total.to_string() accent="bg-orange-50 text-orange-600"/>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2"><HistoryTable history=report.history/></div>
                    <RankingTable rankings=report.rankings/>
                </div>
            }
            .into_any()
        }
        None => view! { <EmptyState title="No rankings loaded" message="Rankings load for the selected location."/> }.into_any(),
    };

    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between">
            <PageHeader title="Local Rankings" subtitle="Track your local search positions and monitor performance"/>
            <LocationForm location=location loading=loading/>
        </div>
        <StatusBanner loading=loading failure=failure notice=notice/>
        {body}
    }
}

#[component]
fn LocationForm(location: String, loading: bool) -> impl IntoView {
    let options = SUPPORTED_LOCATIONS
        .into_iter()
        .map(|loc| view! { <option value=loc selected={loc == location}>{loc}</option> })
        .collect_view();

    view! {
        <div class="mt-4 md:mt-0 flex items-center space-x-4">
            <form method="get" action="/rankings" class="location-form">
                <select name="location">{options}</select>
                <button type="submit" class="px-3 py-2 border rounded-lg">"Show"</button>
            </form>
            <form method="post" action="/rankings/refresh">
                <input type="hidden" name="location" value=location.clone()/>
                <button type="submit" class="bg-blue-600 text-white px-4 py-2 rounded-lg refresh-button" disabled=loading>
                    {if loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn HistoryTable(history: Vec<RankingHistory>) -> impl IntoView {
    let header = HISTORY_LABELS.into_iter().map(|label| view! { <th>{label}</th> }).collect_view();
    let rows = history
        .into_iter()
        .map(|series| {
            let cells = series.points.into_iter().map(|p| view! { <td>{p.to_string()}</td> }).collect_view();
            view! { <tr><td class="font-medium">{series.keyword}</td>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Ranking Trends"</h3>
            <table class="w-full text-sm history-table">
                <thead><tr><th>"Keyword"</th>{header}</tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn RankingTable(rankings: Vec<RankingRecord>) -> impl IntoView {
    let rows = rankings
        .into_iter()
        .map(|r| {
            let change = PositionChange::of(&r);
            let position_class = position_tier(f64::from(r.current_position)).badge_class();
            let url = r.url.clone();
            view! {
                <li class="p-4 ranking-row">
                    <div class="flex items-center justify-between">
                        <p class="font-medium text-gray-900">{r.keyword}</p>
                        <span class=format!("px-2 py-1 rounded-full text-xs {position_class}")>{format!("#{}", r.current_position)}</span>
                    </div>
                    <div class="flex items-center justify-between text-sm mt-1">
                        <span class=change.text_class()>{change.label()}</span>
                        {r.local_pack.then(|| view! { <span class="text-xs bg-green-50 text-green-600 px-2 rounded-full">"Local Pack"</span> })}
                        <span class="text-gray-500">{format!("{} searches", group_thousands(u64::from(r.search_volume)))}</span>
                    </div>
                    <a class="text-xs text-blue-600" href=url>{r.url}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200">
            <h3 class="p-6 text-lg font-semibold text-gray-900 border-b border-gray-200">"Current Rankings"</h3>
            <ul class="divide-y divide-gray-200">{rows}</ul>
        </div>
    }
}
