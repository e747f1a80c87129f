//! # finder-api
//!
//! Client for the problem-finder lookup service.
//!
//! The service exposes one route per platform (all judges, LeetCode,
//! Codeforces), each taking an optional free-text `q` filter and returning
//! a JSON array of `{name, url, score}` objects.
//!
//! ## Design
//!
//! - [`QueryBuilder`] turns a platform and query text into a request target
//! - [`ProblemSource`] abstracts the fetch so callers can swap in fakes
//! - [`HttpProblemSource`] implements it over `reqwest` with a request timeout
//! - [`ranking::rank_by_score`] orders results by the service's score, stably
//!
//! ## Logging
//!
//! Query text and request targets are logged only at trace level.

pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod ranking;
pub mod source;
pub mod types;

pub use config::FinderConfig;
pub use error::{FinderError, Result};
pub use query::QueryBuilder;
pub use source::{HttpProblemSource, ProblemSource};
pub use types::{Platform, Problem};

/// Fetch the problems for `platform` and `query_text`, ranked by score.
///
/// One-shot convenience for callers that do not need session state.
///
/// # Errors
///
/// Returns [`FinderError::Config`] for an invalid `config`, otherwise any
/// error from [`ProblemSource::fetch`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> finder_api::Result<()> {
/// let config = finder_api::FinderConfig::default();
/// let problems =
///     finder_api::fetch_problems(finder_api::Platform::LeetCode, "graph", &config).await?;
/// for problem in &problems {
///     println!("{}: {}", problem.name, problem.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_problems(
    platform: Platform,
    query_text: &str,
    config: &FinderConfig,
) -> Result<Vec<Problem>> {
    let source = HttpProblemSource::new(config)?;
    let target = QueryBuilder::from_config(config).build(platform, query_text);
    let mut problems = source.fetch(&target).await?;
    ranking::rank_by_score(&mut problems);
    Ok(problems)
}
