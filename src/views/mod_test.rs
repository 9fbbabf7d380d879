use std::collections::BTreeSet;

use super::audit::AuditPage;
use super::competitors::CompetitorsPage;
use super::dashboard::DashboardPage;
use super::keywords::{KeywordsPage, KeywordsView};
use super::rankings::RankingsPage;
use super::{NavItem, render_document};
use crate::model::KeywordQuery;
use crate::sampler::SequenceSampler;
use crate::services;
use crate::services::keywords::{KeywordFilter, KeywordSort};
use crate::state::{KeywordRun, PageSlot, PageState};
use leptos::prelude::*;

fn loaded<T: Send + Sync + 'static>(data: T) -> PageState<T> {
    let slot = PageSlot::new();
    slot.succeed(data);
    slot.snapshot()
}

#[test]
fn document_wraps_body_in_layout() {
    let html = render_document("Audit", NavItem::Audit, || view! { <p>"hello"</p> });
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Audit | DealerSEO"));
    assert!(html.contains("<p>hello</p>"));
    assert!(html.contains("nav-link nav-link--active"));
    for item in NavItem::ALL {
        assert!(html.contains(item.href()));
    }
}

#[test]
fn dashboard_reports_provider_status() {
    let state = loaded(services::dashboard::generate());
    let html = render_document("Dashboard", NavItem::Dashboard, move || {
        view! { <DashboardPage state=state provider=Some("DataForSEO API".to_owned())/> }
    });
    assert!(html.contains("DataForSEO API"));
    assert!(html.contains("15,420"));
    assert!(html.contains("Recent Activity"));

    let html = render_document("Dashboard", NavItem::Dashboard, || {
        view! { <DashboardPage state=PageState::Idle provider=None/> }
    });
    assert!(html.contains("Not connected"));
}

#[test]
fn loading_disables_submit_controls() {
    let html = render_document("Audit", NavItem::Audit, || {
        view! { <AuditPage state=PageState::Loading { previous: None } notice=None/> }
    });
    assert!(html.contains("Auditing..."));
    assert!(html.contains("disabled"));
}

#[test]
fn failure_message_is_shown() {
    let html = render_document("Competitors", NavItem::Competitors, || {
        view! { <CompetitorsPage state=PageState::Failed { message: "upstream exploded".into(), previous: None } notice=None/> }
    });
    assert!(html.contains("upstream exploded"));
    assert!(html.contains("Analyze Your Competitors"));
}

#[test]
fn notices_are_escaped() {
    let html = render_document("Audit", NavItem::Audit, || {
        view! { <AuditPage state=PageState::Idle notice=Some("<script>".into())/> }
    });
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn rankings_page_lists_records_and_history() {
    let report = services::rankings::report("Dallas, TX", &SequenceSampler::constant(0.5));
    let state = loaded(report);
    let html = render_document("Rankings", NavItem::Rankings, move || {
        view! { <RankingsPage state=state location="Dallas, TX".to_owned() notice=None/> }
    });
    assert!(html.contains("used cars Dallas"));
    assert!(html.contains("7 days ago"));
    assert!(html.contains("Local Pack"));
    assert!(html.contains("+2"));
}

#[test]
fn competitor_page_shows_summary_and_cards() {
    let domains = vec!["autonation.com".to_owned(), "carmax.com".to_owned()];
    let state = loaded(services::competitors::report(&domains, &SequenceSampler::constant(0.5)));
    let html = render_document("Competitors", NavItem::Competitors, move || {
        view! { <CompetitorsPage state=state notice=None/> }
    });
    assert!(html.contains("Avg Keywords"));
    assert!(html.contains("3,500"));
    assert!(html.contains("carmax service"));
}

#[test]
fn audit_page_colours_scores_by_tier() {
    let state = loaded(services::audit::generate("dealer.com", &SequenceSampler::constant(0.5)));
    let html = render_document("Audit", NavItem::Audit, move || {
        view! { <AuditPage state=state notice=None/> }
    });
    assert!(html.contains("Missing structured data"));
    assert!(html.contains("text-yellow-600"));
    assert!(html.contains("icon-alert-triangle"));
}

#[test]
fn keyword_results_follow_filter_and_saved_set() {
    let run = KeywordRun {
        query: KeywordQuery { keyword: "Honda dealer".into(), ..KeywordQuery::default() },
        results: services::keywords::generate("Honda dealer"),
    };
    let state = loaded(run);
    let filter = KeywordFilter { min_search_volume: 2000, ..KeywordFilter::default() };
    let saved: BTreeSet<String> = ["Honda dealer near me".to_owned()].into();
    let view_model = KeywordsView { state, filter, sort: KeywordSort::default(), saved, notice: None };

    let html = render_document("Keywords", NavItem::Keywords, move || {
        view! { <KeywordsPage view_model=view_model/> }
    });
    assert!(html.contains("Honda dealer near me"));
    assert!(!html.contains("best Honda dealer dealer"));
    assert!(html.contains("2 keywords found"));
    assert!(html.contains("1 saved"));
    assert!(html.contains("/keywords/export.csv"));
    assert!(html.contains("min_search_volume=2000"));
}

#[test]
fn keyword_page_without_results_shows_prompt() {
    let view_model = KeywordsView {
        state: PageState::Idle,
        filter: KeywordFilter::default(),
        sort: KeywordSort::default(),
        saved: BTreeSet::new(),
        notice: None,
    };
    let html = render_document("Keywords", NavItem::Keywords, move || {
        view! { <KeywordsPage view_model=view_model/> }
    });
    assert!(html.contains("Start Your Keyword Research"));
    assert!(html.contains("Honda dealer"));
}
