//! Dashboard page.

use leptos::prelude::*;

use super::{EmptyState, PageHeader, StatusBanner, failure_of};
use crate::services::dashboard::{Activity, DashboardData, PerformanceSeries, QuickAction, StatCard};
use crate::state::PageState;

#[component]
pub fn DashboardPage(state: PageState<DashboardData>, provider: Option<String>) -> impl IntoView {
    let connection = match provider {
        Some(name) => view! {
            <p class="text-sm text-blue-800 provider-status"><span class="font-medium">"Connected: "</span>{name}</p>
        }
        .into_any(),
        None => view! {
            <p class="text-sm text-gray-600 provider-status"><span class="font-medium">"Not connected: "</span>"SEO data provider disabled"</p>
        }
        .into_any(),
    };

    let body = match state.data().cloned() {
        Some(data) => {
            let data = (*data).clone();
            view! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {data.stats.into_iter().map(|card| view! { <StatCardView card=card/> }).collect_view()}
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-8">
                        <PerformanceTable series=data.performance/>
                        <RecentActivity items=data.activity/>
                    </div>
                    <QuickActions actions=data.quick_actions/>
                </div>
            }
            .into_any()
        }
        None => view! { <EmptyState title="Loading dashboard" message="Figures appear once the overview has loaded."/> }.into_any(),
    };

    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between">
            <PageHeader title="SEO Dashboard" subtitle="Monitor your dealership's local SEO performance"/>
            <div class="bg-blue-50 border border-blue-200 rounded-lg px-4 py-2">{connection}</div>
        </div>
        <StatusBanner loading=state.is_loading() failure=failure_of(&state) notice=None/>
        {body}
    }
}

#[component]
fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 stat-card">
            <p class="text-sm font-medium text-gray-600">{card.title}</p>
            <p class="text-2xl font-bold text-gray-900 mt-1">{card.value}</p>
            <div class="flex items-center mt-4">
                <span class=format!("text-sm font-medium {}", card.change_type.text_class())>{card.change}</span>
                <span class="text-sm text-gray-500 ml-1">"vs last month"</span>
            </div>
        </div>
    }
}

/// Monthly series as a table; chart rendering is left to the browser.
#[component]
fn PerformanceTable(series: PerformanceSeries) -> impl IntoView {
    let rows = series
        .months
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let position = series.average_position.get(i).map(|p| format!("{p:.1}")).unwrap_or_default();
            let pack = series.local_pack_appearances.get(i).map(ToString::to_string).unwrap_or_default();
            let traffic = series.organic_traffic.get(i).map(ToString::to_string).unwrap_or_default();
            view! {
                <tr>
                    <td>{*month}</td>
                    <td>{position}</td>
                    <td>{pack}</td>
                    <td>{traffic}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">"Performance Overview"</h3>
            <table class="w-full text-sm performance-table">
                <thead>
                    <tr><th>"Month"</th><th>"Average Position"</th><th>"Local Pack Appearances"</th><th>"Organic Traffic"</th></tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn RecentActivity(items: Vec<Activity>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-6">"Recent Activity"</h3>
            <ul class="space-y-4">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <li class="activity">
                            <p class="text-sm text-gray-900">{item.message}</p>
                            <p class="text-xs text-gray-500 mt-1">{item.time}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn QuickActions(actions: Vec<QuickAction>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-6">"Quick Actions"</h3>
            <div class="space-y-4">
                {actions
                    .into_iter()
                    .map(|action| view! {
                        <a class="flex items-center p-4 rounded-lg border border-gray-200 quick-action" href=action.href>
                            <div class="ml-4 flex-1">
                                <h4 class="font-medium text-gray-900">{action.title}</h4>
                                <p class="text-sm text-gray-600">{action.description}</p>
                            </div>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
