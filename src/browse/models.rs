//! Data models for explorer views
//!
//! These are pure data structures handed to the rendering layer. They are
//! derived from explorer state on demand and never stored.

use crate::browse::chips::ActiveFilterChip;
use crate::filters::{FacetOptions, ParseError};
use crate::records::Record;
use crate::sort::SortOption;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which list view an explorer serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Model asset library
    #[default]
    Models,
    /// Image gallery
    Images,
    /// Gallery of galleries
    Galleries,
}

impl ViewKind {
    pub const ALL: [Self; 3] = [Self::Models, Self::Images, Self::Galleries];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Models => "models",
            Self::Images => "images",
            Self::Galleries => "galleries",
        }
    }

    /// Default "load more" increment for this view
    #[must_use]
    pub const fn default_batch_size(self) -> usize {
        match self {
            Self::Models => 12,
            Self::Images => 24,
            Self::Galleries => 15,
        }
    }
}

impl FromStr for ViewKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseError::UnknownView(s.to_string()))
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the list area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// Records are still being fetched and none have arrived
    Loading,
    /// The record set itself is empty
    Empty,
    /// Records exist but none pass the active filters
    NoMatches,
    /// At least one record is visible
    Showing,
}

/// "Load more" affordance, present only while records remain hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMore {
    /// Items the next click would reveal: `min(batch_size, remaining)`
    pub next: usize,
    /// Items still hidden
    pub remaining: usize,
}

/// Everything a list view renders, derived from explorer state
#[derive(Debug, Clone)]
pub struct ExplorerView<'a> {
    pub kind: ViewKind,
    pub status: ViewStatus,
    /// Visible records, in sorted order
    pub items: Vec<&'a Record>,
    /// Number of visible records
    pub visible: usize,
    /// Number of records passing the filters
    pub total: usize,
    pub load_more: Option<LoadMore>,
    pub chips: Vec<ActiveFilterChip>,
    pub facets: &'a FacetOptions,
    pub sort: SortOption,
    /// Raw search box text
    pub search_input: &'a str,
}

impl ExplorerView<'_> {
    /// Whether user interaction should be suppressed
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    /// Status line such as `Showing 12 of 30`
    #[must_use]
    pub fn summary(&self) -> String {
        match self.status {
            ViewStatus::Loading => "Loading...".to_string(),
            ViewStatus::Empty => format!("No {} yet", self.kind),
            ViewStatus::NoMatches => format!("No {} match the current filters", self.kind),
            ViewStatus::Showing => format!("Showing {} of {}", self.visible, self.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_kind_parse() {
        for kind in ViewKind::ALL {
            assert_eq!(kind.as_str().parse::<ViewKind>().unwrap(), kind);
        }
        assert_eq!(
            "videos".parse::<ViewKind>(),
            Err(ParseError::UnknownView("videos".to_string()))
        );
    }

    #[test]
    fn test_default_batch_sizes() {
        assert_eq!(ViewKind::Models.default_batch_size(), 12);
        assert_eq!(ViewKind::Images.default_batch_size(), 24);
        assert_eq!(ViewKind::Galleries.default_batch_size(), 15);
    }
}
