//! Keyword research page: research form, filter bar, and results table.

use std::collections::BTreeSet;

use leptos::prelude::*;

use super::{EmptyState, PageHeader, StatusBanner, failure_of};
use crate::model::{Intent, KeywordQuery, KeywordResult};
use crate::services::dashboard::group_thousands;
use crate::services::keywords::{self, KeywordFilter, KeywordSort, POPULAR_KEYWORDS, SortKey, SortOrder};
use crate::state::{KeywordRun, PageState};
use crate::tier::{difficulty_tier, trend_tier};

const LANGUAGES: [&str; 2] = ["English", "Spanish"];

/// Everything the keyword page needs for one render.
pub struct KeywordsView {
    pub state: PageState<KeywordRun>,
    pub filter: KeywordFilter,
    pub sort: KeywordSort,
    pub saved: BTreeSet<String>,
    pub notice: Option<String>,
}

/// Query string that reproduces the current filter and sort.
#[must_use]
pub fn results_query(filter: &KeywordFilter, sort: KeywordSort) -> String {
    format!(
        "min_search_volume={}&max_difficulty={}&intent={}&sort_by={}&sort_order={}",
        filter.min_search_volume,
        filter.max_difficulty,
        filter.intent.as_str(),
        sort.key.as_str(),
        sort.order.as_str()
    )
}

#[component]
pub fn KeywordsPage(view_model: KeywordsView) -> impl IntoView {
    let KeywordsView { state, filter, sort, saved, notice } = view_model;
    let loading = state.is_loading();
    let failure = failure_of(&state);
    let run = state.data().cloned();
    let last_query = run.as_ref().map(|r| r.query.clone()).unwrap_or_default();

    let results = match run {
        Some(run) => {
            let rows = keywords::apply(&run.results, &filter, sort);
            view! { <ResultsPanel rows=rows filter=filter sort=sort saved=saved/> }.into_any()
        }
        None => view! {
            <EmptyState title="Start Your Keyword Research" message="Enter a keyword to discover local SEO opportunities for your dealership"/>
        }
        .into_any(),
    };

    view! {
        <PageHeader title="Keyword Research" subtitle="Discover high-value local keywords for your dealership"/>
        <StatusBanner loading=loading failure=failure notice=notice/>
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            <div class="lg:col-span-1">
                <ResearchForm query=last_query loading=loading/>
            </div>
            <div class="lg:col-span-3">{results}</div>
        </div>
    }
}

#[component]
fn ResearchForm(query: KeywordQuery, loading: bool) -> impl IntoView {
    let popular = POPULAR_KEYWORDS
        .into_iter()
        .map(|keyword| view! {
            <form method="post" action="/keywords" class="inline">
                <input type="hidden" name="keyword" value=keyword/>
                <button type="submit" class="px-3 py-1 text-sm bg-gray-100 rounded-full popular-keyword" disabled=loading>{keyword}</button>
            </form>
        })
        .collect_view();

    let languages = LANGUAGES
        .into_iter()
        .map(|language| {
            let selected = query.language == language || (query.language.is_empty() && language == "English");
            view! { <option value=language selected=selected>{language}</option> }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="font-semibold text-gray-900 mb-4">"Keyword Research"</h3>
            <form method="post" action="/keywords" class="space-y-4 research-form">
                <label class="block text-sm font-medium text-gray-700">"Seed Keyword"
                    <input type="text" name="keyword" required=true placeholder="e.g., Honda dealer" value=query.keyword/>
                </label>
                <label class="block text-sm font-medium text-gray-700">"Location"
                    <input type="text" name="location" placeholder="e.g., Los Angeles, CA" value=query.location/>
                </label>
                <label class="block text-sm font-medium text-gray-700">"Language"
                    <select name="language">{languages}</select>
                </label>
                <button type="submit" class="w-full bg-blue-600 text-white py-3 rounded-lg" disabled=loading>
                    {if loading { "Researching..." } else { "Research Keywords" }}
                </button>
            </form>
            <div class="mt-6">
                <h4 class="text-sm font-medium text-gray-700 mb-3">"Popular Keywords"</h4>
                <div class="flex flex-wrap gap-2">{popular}</div>
            </div>
        </div>
    }
}

#[component]
fn ResultsPanel(rows: Vec<KeywordResult>, filter: KeywordFilter, sort: KeywordSort, saved: BTreeSet<String>) -> impl IntoView {
    let back_query = results_query(&filter, sort);
    let count = rows.len();
    let saved_count = saved.len();

    let table_rows = rows
        .into_iter()
        .map(|row| {
            let is_saved = saved.contains(&row.keyword);
            view! { <ResultRow row=row saved=is_saved back_query=back_query.clone()/> }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 results-panel">
            <div class="p-6 border-b border-gray-200 flex items-center justify-between">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900">"Keyword Results"</h3>
                    <p class="text-sm text-gray-600 results-count">
                        {format!("{count} keywords found")}
                        {(saved_count > 0).then(|| format!(" · {saved_count} saved"))}
                    </p>
                </div>
                <a class="bg-green-600 text-white px-4 py-2 rounded-lg export-link" href="/keywords/export.csv">"Export Keywords"</a>
            </div>
            <FilterBar filter=filter sort=sort/>
            <table class="w-full results-table">
                <thead>
                    <tr>
                        <th>"Keyword"</th>
                        <th>"Search Volume"</th>
                        <th>"Difficulty"</th>
                        <th>"CPC"</th>
                        <th>"Intent"</th>
                        <th>"Trend"</th>
                        <th>"Save"</th>
                    </tr>
                </thead>
                <tbody>{table_rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn FilterBar(filter: KeywordFilter, sort: KeywordSort) -> impl IntoView {
    let intent_options = std::iter::once(("all", "All Intents"))
        .chain(Intent::ALL.into_iter().map(|i| (i.as_str(), i.label())))
        .map(|(value, label)| {
            let selected = filter.intent.as_str() == value;
            view! { <option value=value selected=selected>{label}</option> }
        })
        .collect_view();
    let sort_options = SortKey::ALL
        .into_iter()
        .map(|key| view! { <option value=key.as_str() selected={key == sort.key}>{key.label()}</option> })
        .collect_view();
    let desc = sort.order == SortOrder::Desc;

    view! {
        <form method="get" action="/keywords" class="p-6 grid grid-cols-2 md:grid-cols-5 gap-4 filter-bar">
            <label>"Min Volume"
                <input type="number" name="min_search_volume" min="0" value=filter.min_search_volume.to_string()/>
            </label>
            <label>"Max Difficulty"
                <input type="number" name="max_difficulty" min="0" max="100" value=filter.max_difficulty.to_string()/>
            </label>
            <label>"Intent"
                <select name="intent">{intent_options}</select>
            </label>
            <label>"Sort By"
                <select name="sort_by">{sort_options}</select>
            </label>
            <label>"Order"
                <select name="sort_order">
                    <option value="desc" selected=desc>"Descending"</option>
                    <option value="asc" selected={!desc}>"Ascending"</option>
                </select>
            </label>
            <button type="submit" class="col-span-full bg-blue-600 text-white py-2 rounded-lg">"Apply"</button>
        </form>
    }
}

#[component]
fn ResultRow(row: KeywordResult, saved: bool, back_query: String) -> impl IntoView {
    let difficulty_class = difficulty_tier(f64::from(row.difficulty)).badge_class();
    let trend_class = trend_tier(row.trend).text_class();
    let save_label = if saved { "Saved" } else { "Save" };

    view! {
        <tr class="result-row">
            <td class="font-medium text-gray-900">{row.keyword.clone()}</td>
            <td>{group_thousands(u64::from(row.search_volume))}</td>
            <td><span class=format!("px-2 py-1 rounded-full text-xs {difficulty_class}")>{row.difficulty.to_string()}</span></td>
            <td>{format!("${:.2}", row.cpc)}</td>
            <td>{row.intent.label()}</td>
            <td><span class=trend_class>{row.trend.as_str()}</span></td>
            <td>
                <form method="post" action="/keywords/save">
                    <input type="hidden" name="keyword" value=row.keyword/>
                    <input type="hidden" name="back" value=back_query/>
                    <button type="submit" class="save-toggle">{save_label}</button>
                </form>
            </td>
        </tr>
    }
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
