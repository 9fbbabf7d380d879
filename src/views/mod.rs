//! Server-rendered pages.
//!
//! DESIGN
//! ======
//! Each page is a Leptos component rendered once per request to an HTML
//! string. Components take plain snapshots of page state, so rendering never
//! touches locks or signals. Shared chrome (navigation, status banners, stat
//! tiles) lives here.

pub mod audit;
pub mod competitors;
pub mod dashboard;
pub mod keywords;
pub mod rankings;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use crate::state::PageState;

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Keywords,
    Rankings,
    Competitors,
    Audit,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [NavItem::Dashboard, NavItem::Keywords, NavItem::Rankings, NavItem::Competitors, NavItem::Audit];

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Keywords => "/keywords",
            Self::Rankings => "/rankings",
            Self::Competitors => "/competitors",
            Self::Audit => "/audit",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Keywords => "Keywords",
            Self::Rankings => "Rankings",
            Self::Competitors => "Competitors",
            Self::Audit => "Site Audit",
        }
    }
}

/// Render `body` inside the shared layout as a complete HTML document.
pub fn render_document<F, V>(title: &str, active: NavItem, body: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let title = format!("{title} | DealerSEO");
    let owner = Owner::new();
    let html = owner.with(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{title}</title>
                </head>
                <body class="min-h-screen bg-gray-50">
                    <Nav active=active/>
                    <main class="max-w-7xl mx-auto px-4 py-8 space-y-8">{body()}</main>
                </body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

#[component]
fn Nav(active: NavItem) -> impl IntoView {
    let links = NavItem::ALL
        .into_iter()
        .map(|item| {
            let class = if item == active { "nav-link nav-link--active" } else { "nav-link" };
            view! { <a class=class href=item.href()>{item.label()}</a> }
        })
        .collect_view();

    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 flex items-center h-16 space-x-8">
                <a class="text-xl font-bold text-gray-900" href="/">"DealerSEO"</a>
                <div class="flex space-x-4">{links}</div>
            </div>
        </nav>
    }
}

// =============================================================================
// SHARED WIDGETS
// =============================================================================

/// Page heading with a subtitle.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
            <p class="text-gray-600 mt-2">{subtitle}</p>
        </div>
    }
}

/// Small figure tile used in summary rows.
#[component]
pub fn StatTile(label: &'static str, value: String, #[prop(optional)] accent: &'static str) -> impl IntoView {
    let accent = if accent.is_empty() { "bg-blue-50 text-blue-600" } else { accent };
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 stat-tile">
            <p class="text-sm font-medium text-gray-600">{label}</p>
            <p class=format!("text-2xl font-bold mt-1 {accent}")>{value}</p>
        </div>
    }
}

/// Loading, failure, and request-level notices above a page's content.
#[component]
pub fn StatusBanner(loading: bool, failure: Option<String>, notice: Option<String>) -> impl IntoView {
    view! {
        {loading.then(|| view! {
            <div class="status status--loading" role="status">"Loading… refresh to see results."</div>
        })}
        {failure.map(|message| view! {
            <div class="status status--failed" role="alert">"Operation failed: " {message}</div>
        })}
        {notice.map(|message| view! {
            <div class="status status--notice" role="alert">{message}</div>
        })}
    }
}

/// Placeholder shown before a page has any results.
#[component]
pub fn EmptyState(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-12 text-center empty-state">
            <h3 class="text-lg font-medium text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{message}</p>
        </div>
    }
}

/// Failure message carried by a state snapshot, if any.
pub(crate) fn failure_of<T>(state: &PageState<T>) -> Option<String> {
    state.error().map(str::to_owned)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
