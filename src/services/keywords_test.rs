use super::*;
use crate::state::test_helpers;

fn sample_results() -> Vec<KeywordResult> {
    let mut results = generate("Toyota");
    results.push(KeywordResult {
        keyword: "how to lease a Toyota".into(),
        search_volume: 600,
        difficulty: 20,
        cpc: 1.10,
        intent: Intent::Informational,
        trend: Trend::Down,
    });
    results.push(KeywordResult {
        keyword: "toyota tiny".into(),
        search_volume: 40,
        difficulty: 10,
        cpc: 0.40,
        intent: Intent::Local,
        trend: Trend::Stable,
    });
    results
}

fn all_filters() -> Vec<KeywordFilter> {
    let intents = [
        IntentFilter::All,
        IntentFilter::Only(Intent::Local),
        IntentFilter::Only(Intent::Commercial),
        IntentFilter::Only(Intent::Informational),
    ];
    let mut filters = Vec::new();
    for min_search_volume in [0, 100, 1000, 2500, 5000] {
        for max_difficulty in [0, 35, 50, 70, 100] {
            for intent in intents {
                filters.push(KeywordFilter { min_search_volume, max_difficulty, intent });
            }
        }
    }
    filters
}

fn all_sorts() -> Vec<KeywordSort> {
    let mut sorts = Vec::new();
    for key in SortKey::ALL {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            sorts.push(KeywordSort { key, order });
        }
    }
    sorts
}

// =============================================================================
// generate
// =============================================================================

#[test]
fn generate_produces_five_variants_containing_seed() {
    let results = generate("Honda dealer");
    assert_eq!(results.len(), 5);
    for r in &results {
        assert!(r.keyword.contains("Honda dealer"), "{}", r.keyword);
    }
    assert_eq!(results[0].keyword, "Honda dealer near me");
    assert_eq!(results[2].keyword, "best Honda dealer dealer");
    assert_eq!(results[4].keyword, "used Honda dealer");
}

#[test]
fn generate_trims_seed() {
    let results = generate("  Ford service  ");
    assert_eq!(results[1].keyword, "Ford service dealership");
}

#[test]
fn generate_figures_are_fixed() {
    let results = generate("x");
    let volumes: Vec<u32> = results.iter().map(|r| r.search_volume).collect();
    assert_eq!(volumes, vec![2400, 1800, 1200, 950, 3200]);
    assert!(results.iter().all(|r| r.difficulty <= 100));
    assert_eq!(results[3].intent, Intent::Local);
}

// =============================================================================
// filter
// =============================================================================

#[test]
fn filter_output_is_subset_satisfying_all_predicates() {
    let input = sample_results();
    for filter in all_filters() {
        let out = apply(&input, &filter, KeywordSort::default());
        for r in &out {
            assert!(input.contains(r));
            assert!(r.search_volume >= filter.min_search_volume);
            assert!(r.difficulty <= filter.max_difficulty);
            assert!(filter.intent.matches(r.intent));
        }
        let expected = input.iter().filter(|r| filter.accepts(r)).count();
        assert_eq!(out.len(), expected);
    }
}

#[test]
fn default_filter_drops_low_volume_and_hard_keywords() {
    let out = apply(&sample_results(), &KeywordFilter::default(), KeywordSort::default());
    assert!(out.iter().all(|r| r.keyword != "toyota tiny"));
    assert_eq!(out.len(), 6);
}

#[test]
fn intent_filter_selects_one_category() {
    let filter = KeywordFilter { intent: IntentFilter::Only(Intent::Local), ..KeywordFilter::default() };
    let out = apply(&sample_results(), &filter, KeywordSort::default());
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|r| r.intent == Intent::Local));
}

// =============================================================================
// sort
// =============================================================================

#[test]
fn sort_is_monotone_in_key() {
    let input = sample_results();
    let filter = KeywordFilter { min_search_volume: 0, max_difficulty: 100, intent: IntentFilter::All };
    for sort in all_sorts() {
        let out = apply(&input, &filter, sort);
        for pair in out.windows(2) {
            let ord = sort.key.compare(&pair[0], &pair[1]);
            match sort.order {
                SortOrder::Asc => assert_ne!(ord, Ordering::Greater, "{sort:?}"),
                SortOrder::Desc => assert_ne!(ord, Ordering::Less, "{sort:?}"),
            }
        }
    }
}

#[test]
fn reapplying_is_idempotent() {
    let input = sample_results();
    for filter in all_filters() {
        for sort in all_sorts() {
            let once = apply(&input, &filter, sort);
            let twice = apply(&once, &filter, sort);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn equal_keys_keep_generation_order() {
    let mut input = generate("a");
    for r in &mut input {
        r.search_volume = 500;
    }
    let filter = KeywordFilter { min_search_volume: 0, max_difficulty: 100, intent: IntentFilter::All };
    let out = apply(&input, &filter, KeywordSort { key: SortKey::SearchVolume, order: SortOrder::Desc });
    assert_eq!(out, input);
}

#[test]
fn default_sort_is_search_volume_descending() {
    let out = apply(&generate("Kia"), &KeywordFilter::default(), KeywordSort::default());
    assert_eq!(out[0].keyword, "used Kia");
    assert_eq!(out.last().unwrap().keyword, "Kia service center");
}

// =============================================================================
// query params
// =============================================================================

#[test]
fn params_default_when_absent() {
    let params = ResultsParams::default();
    assert_eq!(params.filter(), KeywordFilter::default());
    assert_eq!(params.sort(), KeywordSort::default());
}

#[test]
fn params_parse_overrides_and_ignore_garbage() {
    let params = ResultsParams {
        min_search_volume: Some("1500".into()),
        max_difficulty: Some("nope".into()),
        intent: Some("commercial".into()),
        sort_by: Some("cpc".into()),
        sort_order: Some("asc".into()),
    };
    let filter = params.filter();
    assert_eq!(filter.min_search_volume, 1500);
    assert_eq!(filter.max_difficulty, DEFAULT_MAX_DIFFICULTY);
    assert_eq!(filter.intent, IntentFilter::Only(Intent::Commercial));
    assert_eq!(params.sort(), KeywordSort { key: SortKey::Cpc, order: SortOrder::Asc });
}

#[test]
fn intent_filter_round_trips_through_str() {
    assert_eq!(IntentFilter::parse(Some("all")), IntentFilter::All);
    assert_eq!(IntentFilter::parse(None), IntentFilter::All);
    let local = IntentFilter::Only(Intent::Local);
    assert_eq!(IntentFilter::parse(Some(local.as_str())), local);
}

// =============================================================================
// research
// =============================================================================

#[tokio::test]
async fn research_rejects_blank_keyword_without_touching_state() {
    let state = test_helpers::test_app_state();
    let err = research(&state, KeywordQuery { keyword: "   ".into(), ..KeywordQuery::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, PageError::InvalidInput(_)));
    assert!(state.pages.keywords.data().is_none());
    assert!(!state.pages.keywords.is_loading());
}

#[tokio::test]
async fn research_stores_trimmed_query_and_resets_saved() {
    let state = test_helpers::test_app_state();
    state.pages.toggle_saved("old keyword");

    let loaded = research(
        &state,
        KeywordQuery { keyword: " Honda dealer ".into(), location: " Dallas, TX ".into(), language: "English".into() },
    )
    .await
    .unwrap();

    assert_eq!(loaded.data.query.keyword, "Honda dealer");
    assert_eq!(loaded.data.query.location, "Dallas, TX");
    assert_eq!(loaded.data.results.len(), 5);
    assert!(state.pages.saved().is_empty());
}

#[tokio::test]
async fn toggle_saved_accepts_only_current_results() {
    let state = test_helpers::test_app_state();
    assert!(matches!(toggle_saved(&state, "Kia near me"), Err(PageError::InvalidInput(_))));

    research(&state, KeywordQuery { keyword: "Kia".into(), ..KeywordQuery::default() })
        .await
        .unwrap();
    assert!(toggle_saved(&state, " Kia near me ").unwrap());
    assert!(matches!(toggle_saved(&state, "Honda near me"), Err(PageError::InvalidInput(_))));
    assert_eq!(state.pages.saved().len(), 1);

    assert!(!toggle_saved(&state, "Kia near me").unwrap());
    assert!(state.pages.saved().is_empty());
}
