//! Core types: the platform selector and the problems the service returns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinderError;

/// A single problem returned by the lookup service.
///
/// Only `name`, `url` and `score` are read; any other fields in the
/// service payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Display name of the problem.
    pub name: String,
    /// Link to the problem on its judge.
    pub url: String,
    /// Relevance signal assigned by the service (higher is better).
    pub score: f64,
}

/// The scope a search is restricted to.
///
/// Each platform maps to its own service route rather than a filter
/// parameter on a single route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Unfiltered search across every judge.
    #[default]
    #[serde(rename = "both")]
    All,
    /// LeetCode problems only.
    LeetCode,
    /// Codeforces problems only.
    CodeForces,
}

impl Platform {
    /// Value used by the platform selector (`both`, `leetcode`, `codeforces`).
    pub fn value(&self) -> &'static str {
        match self {
            Self::All => "both",
            Self::LeetCode => "leetcode",
            Self::CodeForces => "codeforces",
        }
    }

    /// Human-readable label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::LeetCode => "LeetCode",
            Self::CodeForces => "CodeForces",
        }
    }

    /// Path of the service route for this platform.
    pub fn route(&self) -> &'static str {
        match self {
            Self::All => "/",
            Self::LeetCode => "/leetcode",
            Self::CodeForces => "/codeforce",
        }
    }

    /// Returns all selector options in display order.
    pub fn all() -> &'static [Platform] {
        &[Self::All, Self::LeetCode, Self::CodeForces]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.value() == s)
            .ok_or_else(|| FinderError::Config(format!("unknown platform: {s}")))
    }
}
