//! Visibility Filter

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::item::TodoItem;

/// Which items the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    /// Items not yet complete
    Active,
    /// Items marked complete
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter `{0}` (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl Filter {
    /// All variants in footer order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Footer link text
    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.complete,
            Filter::Completed => item.complete,
        }
    }

    /// Map an optional URL parameter to a filter.
    ///
    /// Missing or empty means `All`. Unknown values also fall back to `All`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") => Filter::All,
            Some(raw) => raw.parse().unwrap_or_else(|e: ParseFilterError| {
                log::warn!("[FILTER] {}, showing all", e);
                Filter::All
            }),
        }
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
