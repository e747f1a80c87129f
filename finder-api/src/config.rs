//! Client configuration with sensible defaults.
//!
//! [`FinderConfig`] controls which service is queried, how long a request
//! may take, and the User-Agent sent with each request.

use crate::error::FinderError;

/// Public problem-lookup service.
pub const DEFAULT_BASE_URL: &str = "https://problemfinderapi.onrender.com";

/// Configuration for the problem-lookup client.
///
/// Use [`Default::default()`] for the public service, or construct with
/// field overrides (tests point `base_url` at a mock server).
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Scheme and host of the service. Platform routes are appended to it.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, the crate name and version are sent.
    pub user_agent: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_seconds: 30,
            user_agent: None,
        }
    }
}

impl FinderConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must be an absolute `http` or `https` URL
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), FinderError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| FinderError::Config(format!("base_url is not a valid URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FinderError::Config(
                "base_url must use http or https".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(FinderError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = FinderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(FinderConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = FinderConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn empty_base_url_rejected() {
        let config = FinderConfig {
            base_url: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let config = FinderConfig {
            base_url: "ftp://problems.example".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn local_http_base_url_valid() {
        let config = FinderConfig {
            base_url: "http://127.0.0.1:8080".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
