//! Paginated Search Orchestrator
//!
//! Drives the sequential page-fetch loop for one search run: query gating,
//! per-page requests, result accumulation, progress tracking, and the
//! hit-ceiling flag. Run state lives in a single shared context with one
//! intended writer (the active run); readers take snapshots between awaits.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, RwLockWriteGuard};

use super::grouping::group_by_project;
use super::models::{AggregatedSearchResult, ProjectGroup, SearchQuery};
use super::transport::BookSearchTransport;

/// Minimum query length (in characters, after trimming) to start a run
pub const MIN_QUERY_CHARS: usize = 3;

/// Page size requested from the backend on every page
pub const HITS_PER_PAGE: u32 = 100;

/// The backend's fixed maximum advertised total. A first page reporting
/// exactly this many total hits means the true count may be truncated.
pub const HITS_LIMIT_CEILING: u64 = 1000;

/// Fixed user-facing message for any transport failure; the cause is logged
/// but never shown to the end user.
const SEARCH_FAILED_MESSAGE: &str = "Failed to search";

/// Whether a query should trigger a search run at all.
///
/// Rejection is a silent no-op, not an error.
pub fn is_searchable_query(text: &str) -> bool {
    text.trim().chars().count() >= MIN_QUERY_CHARS
}

/// Observable state of the current (or last) search run
#[derive(Debug, Clone, Default)]
pub struct SearchRunState {
    /// A run is in flight
    pub loading: bool,
    /// Completion estimate, 0-100, non-decreasing within one run
    pub progress: u32,
    /// Fixed failure message when the last run failed
    pub error_message: Option<String>,
    /// Cumulative result of the current run; `None` after a failed run
    pub result: Option<AggregatedSearchResult>,
    /// First page reported exactly the backend's hit ceiling; `None` until a
    /// run has fetched its first page
    pub hits_limit_reached: Option<bool>,
    /// Project key selected by downstream presentation, if any
    pub selected_project: Option<String>,
}

/// Owns the run state and drives search runs against a transport.
///
/// Single-writer contract: only the most recent `run_search` call mutates the
/// state. Each run takes a generation token; a page arriving for a superseded
/// run is discarded rather than merged.
pub struct SearchController<T: BookSearchTransport> {
    transport: T,
    state: RwLock<SearchRunState>,
    generation: AtomicU64,
}

impl<T: BookSearchTransport> SearchController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: RwLock::new(SearchRunState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current run state
    pub async fn state(&self) -> SearchRunState {
        self.state.read().await.clone()
    }

    /// Cumulative hits regrouped by project, recomputed on every call.
    /// `None` when no result is present.
    pub async fn projects(&self) -> Option<Vec<ProjectGroup>> {
        let state = self.state.read().await;
        group_by_project(state.result.as_ref())
    }

    /// Set or clear the selected project key
    pub async fn select_project(&self, project: Option<&str>) {
        self.state.write().await.selected_project = project.map(|p| p.to_string());
    }

    /// Run one paginated search.
    ///
    /// Never fails outward: callers observe failure only through
    /// `error_message` and `result` in the run state. A query shorter than
    /// [`MIN_QUERY_CHARS`] leaves the state completely untouched.
    pub async fn run_search(&self, query: &str) {
        if !is_searchable_query(query) {
            log::debug!("ignoring query shorter than {MIN_QUERY_CHARS} characters");
            return;
        }

        // Fresh generation token; any still-suspended older run becomes stale
        // and will drop its remaining pages instead of merging them.
        let run = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            state.selected_project = None;
            state.loading = true;
            state.progress = 0;
            state.error_message = None;
        }

        log::info!("starting search run {run} for {HITS_PER_PAGE} hits per page");

        let mut page = 1u32;
        loop {
            let request = SearchQuery::for_page(query, HITS_PER_PAGE, page);
            match self.transport.search(request).await {
                Ok(response) => {
                    // Missing pagination metadata means the backend cannot
                    // tell us about further pages: treat this as the last one.
                    let finished = match (response.page, response.total_pages) {
                        (Some(p), Some(t)) => p >= t,
                        _ => true,
                    };
                    // total_pages of 0 would divide by zero; missing metadata
                    // reads as 0% like a missing page number does. The page
                    // number is server-controlled, so the multiply saturates
                    // instead of overflowing.
                    let total_pages = response.total_pages.unwrap_or(1).max(1);
                    let progress = response.page.unwrap_or(0).saturating_mul(100) / total_pages;

                    let Some(mut state) = self.run_state(run).await else {
                        log::debug!("discarding page {page} of superseded run {run}");
                        return;
                    };
                    state.progress = progress;
                    if page == 1 {
                        state.hits_limit_reached =
                            Some(response.total_hits == Some(HITS_LIMIT_CEILING));
                        state.result = Some(response);
                    } else if let Some(result) = state.result.as_mut() {
                        result.append_page(response);
                    }

                    if finished {
                        log::info!("search run {run} finished after {page} page(s)");
                        break;
                    }
                    page += 1;
                }
                Err(e) => {
                    log::warn!("search run {run} failed on page {page}: {e}");
                    let Some(mut state) = self.run_state(run).await else {
                        return;
                    };
                    state.error_message = Some(SEARCH_FAILED_MESSAGE.to_string());
                    state.result = None;
                    break;
                }
            }
        }

        if let Some(mut state) = self.run_state(run).await {
            state.loading = false;
        }
    }

    /// Write access to the run state, granted only while `run` is still the
    /// current generation. The generation is re-checked under the lock so a
    /// superseded run can never slip a write in after a newer run has already
    /// reset or merged into the state.
    async fn run_state(&self, run: u64) -> Option<RwLockWriteGuard<'_, SearchRunState>> {
        let state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) == run {
            Some(state)
        } else {
            None
        }
    }
}
