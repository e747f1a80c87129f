//! Error types for the finder-api crate.
//!
//! All errors use stable string messages suitable for display to users.
//! The session layer shows [`FinderError`] messages verbatim.

/// Errors that can occur while querying the problem-lookup service.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// The service answered with a non-success HTTP status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request could not be completed (DNS, connection, TLS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The response body was not a JSON array of problems.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl FinderError {
    /// Map a [`reqwest::Error`] onto the matching variant.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Convenience type alias for finder-api results.
pub type Result<T> = std::result::Result<T, FinderError>;
