//! Shared HTTP client for service requests.
//!
//! Provides a configured [`reqwest::Client`] with the request timeout and
//! User-Agent taken from [`FinderConfig`].

use crate::config::FinderConfig;
use crate::error::FinderError;
use std::time::Duration;

/// User-Agent sent when the config does not override it.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for the lookup service.
///
/// # Errors
///
/// Returns [`FinderError::Config`] if the client cannot be constructed.
pub fn build_client(config: &FinderConfig) -> Result<reqwest::Client, FinderError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FinderError::Config(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_with_default_config() {
        assert!(build_client(&FinderConfig::default()).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = FinderConfig {
            user_agent: Some("ProblemFinderTest/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn default_user_agent_names_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("finder-api/"));
    }
}
