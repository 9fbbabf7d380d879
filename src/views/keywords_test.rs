use super::*;
use crate::services::keywords::IntentFilter;
use crate::state::{PageSlot, PageState};
use crate::views::{NavItem, render_document};

fn run_for(keyword: &str) -> KeywordRun {
    KeywordRun {
        query: KeywordQuery { keyword: keyword.into(), location: "Dallas, TX".into(), language: "Spanish".into() },
        results: keywords::generate(keyword),
    }
}

fn loaded_run(keyword: &str) -> PageState<KeywordRun> {
    let slot = PageSlot::new();
    slot.succeed(run_for(keyword));
    slot.snapshot()
}

fn render(view_model: KeywordsView) -> String {
    render_document("Keywords", NavItem::Keywords, move || view! { <KeywordsPage view_model=view_model/> })
}

fn view_model(state: PageState<KeywordRun>) -> KeywordsView {
    KeywordsView {
        state,
        filter: KeywordFilter::default(),
        sort: KeywordSort::default(),
        saved: BTreeSet::new(),
        notice: None,
    }
}

#[test]
fn results_query_carries_every_control() {
    let filter = KeywordFilter { min_search_volume: 500, max_difficulty: 40, intent: IntentFilter::Only(Intent::Local) };
    let sort = KeywordSort { key: SortKey::Cpc, order: SortOrder::Asc };
    assert_eq!(
        results_query(&filter, sort),
        "min_search_volume=500&max_difficulty=40&intent=local&sort_by=cpc&sort_order=asc"
    );
}

#[test]
fn filter_bar_reflects_current_filter_and_sort() {
    let mut vm = view_model(loaded_run("Honda dealer"));
    vm.filter = KeywordFilter { min_search_volume: 1500, max_difficulty: 55, intent: IntentFilter::Only(Intent::Commercial) };
    vm.sort = KeywordSort { key: SortKey::Difficulty, order: SortOrder::Asc };
    let html = render(vm);

    assert!(html.contains("filter-bar"));
    assert!(html.contains(r#"name="min_search_volume" min="0" value="1500""#));
    assert!(html.contains(r#"value="55""#));
    assert!(html.contains(r#"<option value="commercial" selected"#));
    assert!(html.contains(r#"<option value="difficulty" selected"#));
    assert!(html.contains(r#"<option value="asc" selected"#));
    assert!(!html.contains(r#"<option value="desc" selected"#));
}

#[test]
fn save_forms_return_to_current_view() {
    let mut vm = view_model(loaded_run("Honda dealer"));
    vm.filter = KeywordFilter { min_search_volume: 0, max_difficulty: 100, intent: IntentFilter::All };
    vm.saved = ["used Honda dealer".to_owned()].into();
    let html = render(vm);

    assert_eq!(html.matches(r#"action="/keywords/save""#).count(), 5);
    assert_eq!(html.matches(r#"name="back""#).count(), 5);
    assert!(html.contains("min_search_volume=0"));
    assert_eq!(html.matches("Saved").count(), 1);
    assert!(html.contains("1 saved"));
}

#[test]
fn loading_disables_research_and_keeps_prior_results() {
    let slot = PageSlot::new();
    slot.succeed(run_for("Honda dealer"));
    slot.begin().unwrap();
    let html = render(view_model(slot.snapshot()));

    assert!(html.contains("Researching..."));
    assert!(html.contains("disabled"));
    assert!(html.contains("Honda dealer near me"));
    assert!(!html.contains("Start Your Keyword Research"));
}

#[test]
fn failed_run_shows_message_over_prior_results() {
    let slot = PageSlot::new();
    slot.succeed(run_for("Honda dealer"));
    slot.begin().unwrap();
    slot.fail("keyword service unavailable");
    let html = render(view_model(slot.snapshot()));

    assert!(html.contains("keyword service unavailable"));
    assert!(html.contains("Honda dealer near me"));
    assert!(html.contains("Research Keywords"));
}

#[test]
fn research_form_remembers_last_query() {
    let html = render(view_model(loaded_run("Ford service")));
    assert!(html.contains(r#"value="Ford service""#));
    assert!(html.contains(r#"value="Dallas, TX""#));
    assert!(html.contains(r#"<option value="Spanish" selected"#));
}

#[test]
fn popular_keywords_post_to_research() {
    let html = render(view_model(PageState::Idle));
    for keyword in POPULAR_KEYWORDS {
        assert!(html.contains(&format!(r#"name="keyword" value="{keyword}""#)), "{keyword}");
    }
}
