//! Problem Finder: search session state for the problem-lookup service.
//!
//! This crate holds the state machine behind a problem search view:
//! Input → Query target → Fetch → Rank → Paginate → Render
//!
//! # Architecture
//!
//! - **finder-api**: builds platform-scoped request targets and fetches
//!   problems from the remote service
//! - **Session**: the query text, platform, status, ranked results and
//!   current page of one view
//! - **Controller**: runs searches against a [`finder_api::ProblemSource`],
//!   discards responses to superseded searches, and turns every failure
//!   into an error message on the session
//! - **Pagination**: ten results per page, rendered as two columns of five
//!
//! The library installs no tracing subscriber; hosts choose their own.

pub mod controller;
pub mod pagination;
pub mod session;

pub use controller::{FALLBACK_ERROR_MESSAGE, SearchController, SearchTicket};
pub use finder_api::{FinderConfig, FinderError, HttpProblemSource, Platform, Problem};
pub use pagination::{COLUMN_SPLIT, PAGE_SIZE, PageView};
pub use session::{SearchSession, SearchStatus};

/// Create a controller that searches the service named in `config` over HTTP.
///
/// # Errors
///
/// Returns [`FinderError::Config`] if `config` is invalid or the HTTP client
/// cannot be built.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), problem_finder::FinderError> {
/// use problem_finder::{FinderConfig, Platform};
///
/// let mut controller = problem_finder::http_controller(&FinderConfig::default())?;
/// controller.set_query_text("binary search");
/// controller.on_platform_change(Platform::LeetCode).await;
/// let view = controller.page_view();
/// println!("{}", view.caption());
/// # Ok(())
/// # }
/// ```
pub fn http_controller(
    config: &FinderConfig,
) -> Result<SearchController<HttpProblemSource>, FinderError> {
    SearchController::new(HttpProblemSource::new(config)?, config)
}
