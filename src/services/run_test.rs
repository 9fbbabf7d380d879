use super::*;
use crate::model::KeywordQuery;
use crate::state::{KeywordRun, PageState};

fn run_fixture(keyword: &str) -> KeywordRun {
    KeywordRun {
        query: KeywordQuery { keyword: keyword.into(), location: String::new(), language: "English".into() },
        results: Vec::new(),
    }
}

#[tokio::test]
async fn success_stores_result() {
    let pages = Arc::new(Pages::default());
    let loaded = run_operation(Arc::clone(&pages), Duration::ZERO, || Ok(run_fixture("Honda dealer")))
        .await
        .unwrap();

    assert_eq!(loaded.data.query.keyword, "Honda dealer");
    let stored = pages.keywords.data().unwrap();
    assert!(Arc::ptr_eq(&stored, &loaded.data));
}

#[tokio::test]
async fn rejection_moves_slot_to_failed() {
    let pages = Arc::new(Pages::default());
    let err = run_operation::<KeywordRun, _>(Arc::clone(&pages), Duration::ZERO, || Err("simulated rejection".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, PageError::TaskFailed(ref m) if m == "simulated rejection"));
    assert_eq!(pages.keywords.snapshot().error(), Some("simulated rejection"));
}

#[tokio::test]
async fn rejection_keeps_previous_result() {
    let pages = Arc::new(Pages::default());
    run_operation(Arc::clone(&pages), Duration::ZERO, || Ok(run_fixture("Honda dealer")))
        .await
        .unwrap();
    run_operation::<KeywordRun, _>(Arc::clone(&pages), Duration::ZERO, || Err("simulated rejection".into()))
        .await
        .unwrap_err();

    let snapshot = pages.keywords.snapshot();
    assert_eq!(snapshot.error(), Some("simulated rejection"));
    assert_eq!(snapshot.data().unwrap().query.keyword, "Honda dealer");
}

#[tokio::test]
async fn in_flight_operation_blocks_second_start() {
    let pages = Arc::new(Pages::default());
    pages.keywords.begin().unwrap();

    let err = run_operation(Arc::clone(&pages), Duration::ZERO, || Ok(run_fixture("second")))
        .await
        .unwrap_err();

    assert!(matches!(err, PageError::AlreadyLoading));
    assert!(pages.keywords.is_loading());
}

#[tokio::test]
async fn concurrent_start_is_rejected_while_waiting() {
    let pages = Arc::new(Pages::default());
    let first = tokio::spawn(run_operation(Arc::clone(&pages), Duration::from_millis(200), || {
        Ok(run_fixture("first"))
    }));

    while !pages.keywords.is_loading() {
        tokio::task::yield_now().await;
    }

    let second = run_operation(Arc::clone(&pages), Duration::ZERO, || Ok(run_fixture("second"))).await;
    assert!(matches!(second, Err(PageError::AlreadyLoading)));

    let loaded = first.await.unwrap().unwrap();
    assert_eq!(loaded.data.query.keyword, "first");
}

#[tokio::test]
async fn panicking_producer_marks_failed() {
    let pages = Arc::new(Pages::default());
    let err = run_operation::<KeywordRun, _>(Arc::clone(&pages), Duration::ZERO, || panic!("generator exploded"))
        .await
        .unwrap_err();

    assert!(matches!(err, PageError::TaskFailed(_)));
    assert!(matches!(pages.keywords.snapshot(), PageState::Failed { .. }));
    pages.keywords.begin().unwrap();
}

#[tokio::test]
async fn other_pages_are_untouched() {
    let pages = Arc::new(Pages::default());
    run_operation(Arc::clone(&pages), Duration::ZERO, || Ok(run_fixture("x")))
        .await
        .unwrap();
    assert!(matches!(pages.audit.snapshot(), PageState::Idle));
    assert!(matches!(pages.rankings.snapshot(), PageState::Idle));
}
