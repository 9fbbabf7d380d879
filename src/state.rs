//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Each page owns one `PageSlot` holding a `PageState` tagged variant
//! (`Idle`, `Loading`, `Success`, `Failed`). No state crosses pages.
//! `Loading` and `Failed` keep the last successful result, so a page keeps
//! showing it until a newer run succeeds. The sampler and the SEO data
//! provider are capabilities injected here rather than module-level
//! singletons.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::SimulatedDelays;
use crate::model::{AuditReport, CompetitorReport, KeywordQuery, KeywordResult, RankingReport};
use crate::provider::SeoDataProvider;
use crate::sampler::Sampler;
use crate::services::dashboard::DashboardData;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("an operation is already in progress for this page")]
    AlreadyLoading,
    #[error("operation failed: {0}")]
    TaskFailed(String),
}

impl crate::error::ErrorCode for PageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "E_INVALID_INPUT",
            Self::AlreadyLoading => "E_ALREADY_LOADING",
            Self::TaskFailed(_) => "E_TASK_FAILED",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::AlreadyLoading)
    }
}

// =============================================================================
// PAGE STATE
// =============================================================================

/// A completed operation's result.
#[derive(Debug)]
pub struct Loaded<T> {
    pub run_id: Uuid,
    pub completed_at: OffsetDateTime,
    pub data: Arc<T>,
}

impl<T> Clone for Loaded<T> {
    fn clone(&self) -> Self {
        Self { run_id: self.run_id, completed_at: self.completed_at, data: Arc::clone(&self.data) }
    }
}

/// Lifecycle of one page's data.
#[derive(Debug)]
pub enum PageState<T> {
    Idle,
    Loading { previous: Option<Loaded<T>> },
    Success(Loaded<T>),
    Failed { message: String, previous: Option<Loaded<T>> },
}

impl<T> Clone for PageState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading { previous } => Self::Loading { previous: previous.clone() },
            Self::Success(loaded) => Self::Success(loaded.clone()),
            Self::Failed { message, previous } => Self::Failed { message: message.clone(), previous: previous.clone() },
        }
    }
}

impl<T> PageState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Latest successful run: the current one, or the one a pending or
    /// failed run is holding on to.
    #[must_use]
    pub fn loaded(&self) -> Option<&Loaded<T>> {
        match self {
            Self::Idle => None,
            Self::Success(loaded) => Some(loaded),
            Self::Loading { previous } | Self::Failed { previous, .. } => previous.as_ref(),
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&Arc<T>> {
        self.loaded().map(|loaded| &loaded.data)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Short status label for logs and JSON responses.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Success(_) => "success",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Owner of one page's state. Transitions are atomic under a short lock.
pub struct PageSlot<T> {
    state: Mutex<PageState<T>>,
}

impl<T> PageSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { state: Mutex::new(PageState::Idle) }
    }

    fn lock(&self) -> MutexGuard<'_, PageState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> PageState<T> {
        self.lock().clone()
    }

    /// Latest successful data, kept across later loading and failed runs.
    #[must_use]
    pub fn data(&self) -> Option<Arc<T>> {
        self.lock().data().cloned()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    /// Move to `Loading`, keeping the last result. Rejected while another
    /// operation is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::AlreadyLoading`] if the slot is already loading.
    pub fn begin(&self) -> Result<(), PageError> {
        let mut state = self.lock();
        if state.is_loading() {
            return Err(PageError::AlreadyLoading);
        }
        let previous = state.loaded().cloned();
        *state = PageState::Loading { previous };
        Ok(())
    }

    /// Store a result, replacing whatever was there.
    pub fn succeed(&self, data: T) -> Loaded<T> {
        let loaded = Loaded { run_id: Uuid::new_v4(), completed_at: OffsetDateTime::now_utc(), data: Arc::new(data) };
        *self.lock() = PageState::Success(loaded.clone());
        loaded
    }

    /// Record a rejected run. The last successful result stays in place.
    pub fn fail(&self, message: impl Into<String>) {
        let mut state = self.lock();
        let previous = state.loaded().cloned();
        *state = PageState::Failed { message: message.into(), previous };
    }
}

impl<T> Default for PageSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Data owned by exactly one page slot.
pub trait PageData: Send + Sync + Sized + 'static {
    /// Page name used in logs.
    const PAGE: &'static str;

    fn slot(pages: &Pages) -> &PageSlot<Self>;
}

// =============================================================================
// PAGES
// =============================================================================

/// Keyword research run: the query that produced it and its results.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRun {
    pub query: KeywordQuery,
    pub results: Vec<KeywordResult>,
}

/// Per-page state containers.
#[derive(Default)]
pub struct Pages {
    pub dashboard: PageSlot<DashboardData>,
    pub keywords: PageSlot<KeywordRun>,
    /// Keywords the operator marked for tracking; reset on each new search.
    pub saved_keywords: Mutex<BTreeSet<String>>,
    pub rankings: PageSlot<RankingReport>,
    pub competitors: PageSlot<CompetitorReport>,
    pub audit: PageSlot<AuditReport>,
}

impl Pages {
    /// Toggle a keyword in the saved set. Returns whether it is now saved.
    pub fn toggle_saved(&self, keyword: &str) -> bool {
        let mut saved = self
            .saved_keywords
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if saved.remove(keyword) {
            false
        } else {
            saved.insert(keyword.to_owned());
            true
        }
    }

    #[must_use]
    pub fn saved(&self) -> BTreeSet<String> {
        self.saved_keywords
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_saved(&self) {
        self.saved_keywords
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl PageData for DashboardData {
    const PAGE: &'static str = "dashboard";

    fn slot(pages: &Pages) -> &PageSlot<Self> {
        &pages.dashboard
    }
}

impl PageData for KeywordRun {
    const PAGE: &'static str = "keywords";

    fn slot(pages: &Pages) -> &PageSlot<Self> {
        &pages.keywords
    }
}

impl PageData for RankingReport {
    const PAGE: &'static str = "rankings";

    fn slot(pages: &Pages) -> &PageSlot<Self> {
        &pages.rankings
    }
}

impl PageData for CompetitorReport {
    const PAGE: &'static str = "competitors";

    fn slot(pages: &Pages) -> &PageSlot<Self> {
        &pages.competitors
    }
}

impl PageData for AuditReport {
    const PAGE: &'static str = "audit";

    fn slot(pages: &Pages) -> &PageSlot<Self> {
        &pages.audit
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub pages: Arc<Pages>,
    pub sampler: Arc<dyn Sampler>,
    pub provider: Option<Arc<dyn SeoDataProvider>>,
    pub delays: SimulatedDelays,
}

impl AppState {
    #[must_use]
    pub fn new(sampler: Arc<dyn Sampler>, provider: Option<Arc<dyn SeoDataProvider>>, delays: SimulatedDelays) -> Self {
        Self { pages: Arc::new(Pages::default()), sampler, provider, delays }
    }

    /// Display name of the connected provider, if any.
    #[must_use]
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|provider| provider.name())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
