//! Free-text matching against a record's searchable fields
//!
//! Each record is flattened into a *haystack*: the normalized, space-joined
//! text of every field a user might search for. A query then matches by
//! containment in that haystack.
//!
//! Two interpretations of a multi-word query are supported:
//!
//! - [`MatchMode::Substring`]: the whole query must appear as one contiguous
//!   run of text (`"neon cat"` does not match `"cat ... neon"`).
//! - [`MatchMode::AllTokens`]: every whitespace-separated word of the query
//!   must appear somewhere, in any order.
//!
//! `Substring` is the default since it is what existing list views do.

use crate::records::{Record, RecordKind};
use crate::search::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filters::ParseError;

/// How a multi-word query is matched against a haystack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Query must occur as one contiguous substring
    #[default]
    Substring,
    /// Every query token must occur somewhere
    AllTokens,
}

impl FromStr for MatchMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "substring" => Ok(Self::Substring),
            "all-tokens" => Ok(Self::AllTokens),
            _ => Err(ParseError::InvalidValue(format!("match mode '{s}'"))),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("substring"),
            Self::AllTokens => f.write_str("all-tokens"),
        }
    }
}

/// Build the normalized haystack for a record
#[must_use]
pub fn haystack(record: &Record) -> String {
    let mut parts: Vec<&str> = vec![record.title.as_str(), record.id.as_str()];

    match &record.kind {
        RecordKind::Model(model) => {
            parts.push(&model.slug);
            parts.extend(model.description.as_deref());
            parts.extend(model.version_label.as_deref());
            parts.extend(model.object_name.as_deref());
        }
        RecordKind::Image(image) => {
            parts.extend(image.description.as_deref());
            parts.extend(image.object_name.as_deref());
        }
        RecordKind::Gallery(gallery) => {
            parts.extend(gallery.description.as_deref());
            for entry in &gallery.entries {
                if let Some(asset) = &entry.asset {
                    parts.push(&asset.title);
                }
                parts.extend(entry.note.as_deref());
            }
        }
    }

    parts.push(&record.owner.display_name);
    parts.extend(record.tags().iter().map(|t| t.label.as_str()));

    let joined = parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize(Some(&joined))
}

/// Test a record against an already-normalized query using the default mode
#[must_use]
pub fn matches(record: &Record, normalized_query: &str) -> bool {
    matches_with(record, normalized_query, MatchMode::default())
}

/// Test a record against an already-normalized query
///
/// An empty (or whitespace-only) query matches every record.
#[must_use]
pub fn matches_with(record: &Record, normalized_query: &str, mode: MatchMode) -> bool {
    if normalized_query.trim().is_empty() {
        return true;
    }
    haystack_contains(&haystack(record), normalized_query, mode)
}

/// Containment test on a prebuilt haystack
#[must_use]
pub fn haystack_contains(haystack: &str, normalized_query: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => haystack.contains(normalized_query),
        MatchMode::AllTokens => normalized_query
            .split_whitespace()
            .all(|token| haystack.contains(token)),
    }
}
