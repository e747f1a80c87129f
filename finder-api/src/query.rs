//! Request target construction.
//!
//! A target is the service base URL, the route for the selected
//! [`Platform`], and a `q` parameter carrying the percent-encoded query
//! text when the text is non-empty.

use crate::config::FinderConfig;
use crate::types::Platform;

/// Builds fully-qualified request targets for the lookup service.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: String,
}

impl QueryBuilder {
    /// Create a builder for the given service base URL.
    ///
    /// Trailing slashes are stripped so routes join cleanly.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Create a builder for the service named in `config`.
    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(&config.base_url)
    }

    /// Build the request target for `platform` and `query_text`.
    ///
    /// Total over its inputs: any string is accepted and escaped. The
    /// query text is not trimmed, so whitespace-only text still filters.
    pub fn build(&self, platform: Platform, query_text: &str) -> String {
        let mut target = format!("{}{}", self.base_url, platform.route());
        if !query_text.is_empty() {
            target.push_str("?q=");
            target.push_str(&urlencoding::encode(query_text));
        }
        target
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::from_config(&FinderConfig::default())
    }
}
