//! Search controller: drives one [`SearchSession`] through its lifecycle.
//!
//! Every search start takes a new generation tag. A completion is applied
//! only if its tag is still the latest, so a slow response to a superseded
//! search can never overwrite the results of a newer one.
//!
//! # Pipeline
//!
//! 1. Enter `Loading`, clear the error, reset to page 1
//! 2. Build the request target with [`QueryBuilder`]
//! 3. Fetch through the [`ProblemSource`], bounded by the request timeout
//! 4. Drop the outcome if a newer search has started
//! 5. On success rank by score and enter `Success`; on any error clear the
//!    results and enter `Error` with a displayable message

use std::time::Duration;

use finder_api::ranking::rank_by_score;
use finder_api::{FinderConfig, FinderError, Platform, Problem, ProblemSource, QueryBuilder};

use crate::pagination::{self, PageView};
use crate::session::SearchSession;

/// Shown when a failure carries no usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch results. Please try again later.";

/// Handle for one started search.
///
/// Returned by [`SearchController::begin_search`] and handed back to
/// [`SearchController::complete_search`] with the fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    platform: Platform,
    target: String,
}

impl SearchTicket {
    /// Generation tag of this search.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Platform the search was scoped to.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Fully-qualified request target to fetch.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Owns a [`SearchSession`] and the source it searches.
#[derive(Debug)]
pub struct SearchController<S> {
    source: S,
    builder: QueryBuilder,
    timeout: Duration,
    session: SearchSession,
    generation: u64,
}

impl<S: ProblemSource> SearchController<S> {
    /// Create a controller with a fresh session.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Config`] if `config` fails validation.
    pub fn new(source: S, config: &FinderConfig) -> Result<Self, FinderError> {
        config.validate()?;
        Ok(Self {
            source,
            builder: QueryBuilder::from_config(config),
            timeout: Duration::from_secs(config.timeout_seconds),
            session: SearchSession::default(),
            generation: 0,
        })
    }

    /// Current session state.
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// The source searches are fetched from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Upper bound on a single fetch.
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }

    /// Snapshot for the presentation layer.
    pub fn page_view(&self) -> PageView<'_> {
        PageView::of(&self.session)
    }

    /// Results on the current page.
    pub fn current_page_results(&self) -> &[Problem] {
        self.session.current_page_results()
    }

    /// Bind the search input's text. Does not search.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.session.query_text = text.into();
    }

    /// Search with the session's current platform and query text.
    pub async fn submit(&mut self) {
        let platform = self.session.platform;
        let query_text = self.session.query_text.clone();
        self.execute_search(platform, &query_text).await;
    }

    /// Run a complete search for `platform` and `query_text`.
    ///
    /// Both become the session's bound platform and query text, so a later
    /// platform change re-runs this query. Never fails: every error is recorded in the session instead.
    pub async fn execute_search(&mut self, platform: Platform, query_text: &str) {
        let ticket = self.begin_search(platform, query_text);
        let outcome = fetch_with_timeout(&self.source, ticket.target(), self.timeout).await;
        self.complete_search(ticket, outcome);
    }

    /// Record a platform change, re-running the search if there is query text.
    ///
    /// With empty query text only the platform is updated; no request is
    /// issued and the displayed status and results stay as they were.
    pub async fn on_platform_change(&mut self, platform: Platform) {
        self.session.platform = platform;
        if self.session.query_text.is_empty() {
            tracing::debug!(%platform, "platform changed without query, not searching");
            return;
        }
        let query_text = self.session.query_text.clone();
        self.execute_search(platform, &query_text).await;
    }

    /// Move to `page` if it exists. Returns `false` (and changes nothing)
    /// for pages outside `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) -> bool {
        if !pagination::is_valid_page(page, self.session.results.len()) {
            tracing::trace!(page, "ignoring out-of-range page");
            return false;
        }
        self.session.current_page = page;
        true
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.session.current_page.saturating_add(1))
    }

    /// Go back one page; no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.session.current_page.saturating_sub(1))
    }

    /// Start a search: record `platform` and `query_text` as the session's
    /// bound values, enter `Loading` and issue a new generation tag.
    ///
    /// Use together with [`complete_search`](Self::complete_search) when the
    /// fetch runs elsewhere and searches may overlap.
    pub fn begin_search(&mut self, platform: Platform, query_text: &str) -> SearchTicket {
        self.generation += 1;
        self.session.platform = platform;
        self.session.query_text = query_text.to_owned();
        self.session.begin_loading();

        let target = self.builder.build(platform, query_text);
        tracing::debug!(generation = self.generation, %platform, "search started");
        tracing::trace!(query = query_text, url = %target, "search target");

        SearchTicket {
            generation: self.generation,
            platform,
            target,
        }
    }

    /// Apply the outcome of the search identified by `ticket`.
    ///
    /// Returns `false` if a newer search has started since, in which case
    /// the outcome is discarded and the session is left untouched.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<Problem>, FinderError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                latest = self.generation,
                "discarding superseded search response"
            );
            return false;
        }

        match outcome {
            Ok(mut problems) => {
                rank_by_score(&mut problems);
                tracing::debug!(
                    generation = ticket.generation,
                    count = problems.len(),
                    "search succeeded"
                );
                self.session.succeed(problems);
            }
            Err(err) => {
                tracing::warn!(
                    generation = ticket.generation,
                    platform = %ticket.platform,
                    error = %err,
                    "search failed"
                );
                self.session.fail(error_message(&err));
            }
        }
        true
    }
}

/// Fetch `target` from `source`, failing with [`FinderError::Timeout`] if
/// no response arrives within `timeout`.
pub async fn fetch_with_timeout<S: ProblemSource>(
    source: &S,
    target: &str,
    timeout: Duration,
) -> Result<Vec<Problem>, FinderError> {
    match tokio::time::timeout(timeout, source.fetch(target)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(FinderError::Timeout(format!(
            "no response within {}s",
            timeout.as_secs()
        ))),
    }
}

/// Displayable message for `err`, falling back to a generic one when the
/// error renders as blank text.
pub fn error_message(err: &impl std::fmt::Display) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_owned()
    } else {
        message
    }
}
