//! Trait definition for problem sources, and the HTTP implementation.
//!
//! The session controller talks to the service only through
//! [`ProblemSource`], so tests can substitute an in-memory source.

use std::future::Future;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::http;
use crate::types::Problem;

/// Something that can resolve a request target into a list of problems.
///
/// Implementations return problems in the order the backend produced
/// them; ranking is applied by the caller.
///
/// All implementations must be `Send + Sync` so a controller can be moved
/// onto whichever runtime thread drives the presentation layer.
pub trait ProblemSource: Send + Sync {
    /// Fetch and decode the problems at `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Status`] for non-2xx responses,
    /// [`FinderError::Network`] or [`FinderError::Timeout`] when the request
    /// cannot complete, and [`FinderError::Parse`] when the body is not a
    /// JSON array of problems.
    fn fetch(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<Vec<Problem>, FinderError>> + Send;
}

/// [`ProblemSource`] backed by the remote lookup service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProblemSource {
    client: reqwest::Client,
}

impl HttpProblemSource {
    /// Create a source using a client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Config`] if `config` is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        config.validate()?;
        Ok(Self {
            client: http::build_client(config)?,
        })
    }
}

impl ProblemSource for HttpProblemSource {
    async fn fetch(&self, target: &str) -> Result<Vec<Problem>, FinderError> {
        tracing::trace!(url = %target, "problem service request");

        let response = self
            .client
            .get(target)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FinderError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "problem service returned error status");
            return Err(FinderError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FinderError::from_reqwest)?;
        tracing::trace!(bytes = body.len(), "problem service response received");

        parse_problems(&body)
    }
}

/// Decode a service response body.
///
/// Extracted as a separate function for testability with fixed payloads.
pub(crate) fn parse_problems(body: &str) -> Result<Vec<Problem>, FinderError> {
    serde_json::from_str(body).map_err(|e| FinderError::Parse(format!("invalid problem list: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpProblemSource>();
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = FinderConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(HttpProblemSource::new(&config).is_err());
    }

    #[test]
    fn parses_problem_array() {
        let body = r#"[
            {"name": "Two Sum", "url": "https://leetcode.com/problems/two-sum", "score": 0.9},
            {"name": "Watermelon", "url": "https://codeforces.com/problemset/problem/4/A", "score": 1.2}
        ]"#;
        let problems = parse_problems(body).expect("parse");
        assert_eq!(problems.len(), 2);
        // Arrival order is preserved; ranking happens later.
        assert_eq!(problems[0].name, "Two Sum");
    }

    #[test]
    fn parses_empty_array() {
        let problems = parse_problems("[]").expect("parse");
        assert!(problems.is_empty());
    }

    #[test]
    fn object_body_is_parse_error() {
        let err = parse_problems(r#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(err, FinderError::Parse(_)));
    }

    #[test]
    fn html_body_is_parse_error() {
        let err = parse_problems("<html>Service waking up</html>").unwrap_err();
        assert!(err.to_string().starts_with("parse error"));
    }
}
