//! Search session state.
//!
//! A [`SearchSession`] is the state bundle behind one search view: the
//! bound query text, the selected platform, the request status, the ranked
//! results and the current page. Only the controller mutates it.

use finder_api::{Platform, Problem};
use serde::Serialize;

use crate::pagination;

/// Lifecycle of the most recent search.
///
/// ```text
/// Idle ──► Loading ──► Success ──┐
///            ▲    └──► Error ────┤
///            └────────────────────┘  (next search start)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// No search has been started yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest search completed and `results` holds its ranked problems.
    Success,
    /// The latest search failed and `error_message` explains why.
    Error,
}

/// Mutable state for one search view.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    pub(crate) query_text: String,
    pub(crate) platform: Platform,
    pub(crate) status: SearchStatus,
    pub(crate) results: Vec<Problem>,
    pub(crate) error_message: Option<String>,
    pub(crate) current_page: usize,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            platform: Platform::default(),
            status: SearchStatus::default(),
            results: Vec::new(),
            error_message: None,
            current_page: 1,
        }
    }
}

impl SearchSession {
    /// Text currently bound to the search input.
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Selected platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Status of the latest search.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// Ranked results of the latest successful search; empty in every other status.
    pub fn results(&self) -> &[Problem] {
        &self.results
    }

    /// Message for the latest failed search.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Current page, 1-indexed.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages the results span (0 when there are none).
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.results.len())
    }

    /// Results shown on the current page.
    pub fn current_page_results(&self) -> &[Problem] {
        let range = pagination::page_bounds(self.current_page, self.results.len());
        &self.results[range]
    }

    /// Enter `Loading` for a new search, dropping the previous results and error.
    pub(crate) fn begin_loading(&mut self) {
        self.status = SearchStatus::Loading;
        self.results.clear();
        self.error_message = None;
        self.current_page = 1;
    }

    /// Replace the results wholesale and enter `Success`.
    pub(crate) fn succeed(&mut self, results: Vec<Problem>) {
        self.results = results;
        self.error_message = None;
        self.status = SearchStatus::Success;
        self.current_page = 1;
    }

    /// Clear the results and enter `Error` with `message`.
    pub(crate) fn fail(&mut self, message: String) {
        self.results.clear();
        self.error_message = Some(message);
        self.status = SearchStatus::Error;
        self.current_page = 1;
    }
}
