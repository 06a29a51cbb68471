//! Filter selection types
//!
//! - `FilterState`: the active selection for one list view
//! - `SizeBucket`: coarse classification of a record's byte size
//! - `ContentType`: the exclusive "type" selection
//! - `FilterAxis`: names one independently clearable part of a `FilterState`

use crate::filters::error::ParseError;
use crate::records::{Record, Visibility};
use byte_unit::{Byte, UnitType};
use std::fmt;
use std::str::FromStr;

const MIB: u64 = 1024 * 1024;

/// Lower bound (inclusive) of the medium bucket
pub const MEDIUM_THRESHOLD: u64 = 50 * MIB;

/// Lower bound (inclusive) of the large bucket
pub const LARGE_THRESHOLD: u64 = 200 * MIB;

/// Coarse size classification
///
/// Every record falls in exactly one bucket: `Unknown` when no size is
/// recorded, otherwise by half-open ranges with an unbounded top bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeBucket {
    Unknown,
    Small,
    Medium,
    Large,
}

impl SizeBucket {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Unknown];

    /// Classify an optional byte count
    #[must_use]
    pub const fn classify(size: Option<u64>) -> Self {
        match size {
            None => Self::Unknown,
            Some(bytes) if bytes < MEDIUM_THRESHOLD => Self::Small,
            Some(bytes) if bytes < LARGE_THRESHOLD => Self::Medium,
            Some(_) => Self::Large,
        }
    }

    #[must_use]
    pub fn of(record: &Record) -> Self {
        Self::classify(record.file_size())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Human label including the bucket bounds, e.g. `Small (< 50 MiB)`
    #[must_use]
    pub fn label(self) -> String {
        let fmt = |bytes: u64| {
            format!("{:.0}", Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary))
        };
        match self {
            Self::Unknown => "Unknown size".to_string(),
            Self::Small => format!("Small (< {})", fmt(MEDIUM_THRESHOLD)),
            Self::Medium => format!(
                "Medium ({} - {})",
                fmt(MEDIUM_THRESHOLD),
                fmt(LARGE_THRESHOLD)
            ),
            Self::Large => format!("Large (>= {})", fmt(LARGE_THRESHOLD)),
        }
    }
}

impl FromStr for SizeBucket {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(ParseError::InvalidSizeBucket(s.to_string())),
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(ParseError::InvalidVisibility(s.to_string())),
        }
    }
}

/// Exclusive content-type selection
///
/// Assets are typed by their type-category tag; galleries by what their
/// entries reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Asset carries the type tag with this id
    TypeTag(String),
    /// Gallery has at least one image entry
    HasImages,
    /// Gallery has at least one model entry
    HasModels,
    /// Gallery has no entries at all
    NoEntries,
}

impl ContentType {
    /// Identifier used in chips, facet options and on the command line
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::TypeTag(id) => format!("type:{id}"),
            Self::HasImages => "has-images".to_string(),
            Self::HasModels => "has-models".to_string(),
            Self::NoEntries => "empty".to_string(),
        }
    }
}

impl FromStr for ContentType {
    type Err = ParseError;

    /// Accepts `has-images`, `has-models`, `empty` or `type:<tag id>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "has-images" => Ok(Self::HasImages),
            "has-models" => Ok(Self::HasModels),
            "empty" => Ok(Self::NoEntries),
            _ => match s.strip_prefix("type:") {
                Some(id) if !id.is_empty() => Ok(Self::TypeTag(id.to_string())),
                _ => Err(ParseError::InvalidContentType(s.to_string())),
            },
        }
    }
}

/// One independently clearable part of a `FilterState`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterAxis {
    Search,
    Owner,
    Visibility,
    ContentType,
    Size,
    Tag(String),
}

/// The active filter selection of a list view
///
/// `None` on an exclusive axis means "all". Selected tag ids keep their
/// selection order and never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Applied (not raw) search text
    pub search: String,
    pub owner: Option<String>,
    pub visibility: Option<Visibility>,
    pub content_type: Option<ContentType>,
    pub size: Option<SizeBucket>,
    pub tags: Vec<String>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no axis deviates from its default
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.owner.is_none()
            && self.visibility.is_none()
            && self.content_type.is_none()
            && self.size.is_none()
            && self.tags.is_empty()
    }

    /// Add a tag id to the selection; returns false if already selected
    pub fn add_tag(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.tags.contains(&id) {
            return false;
        }
        self.tags.push(id);
        true
    }

    /// Remove a tag id from the selection; returns false if it was not selected
    pub fn remove_tag(&mut self, id: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != id);
        self.tags.len() != before
    }

    /// Toggle a tag id; returns true if the tag is now selected
    pub fn toggle_tag(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.remove_tag(&id) {
            false
        } else {
            self.tags.push(id);
            true
        }
    }

    /// Reset exactly one axis to its default
    ///
    /// Returns true when the state changed.
    pub fn clear_axis(&mut self, axis: &FilterAxis) -> bool {
        match axis {
            FilterAxis::Search => !std::mem::take(&mut self.search).is_empty(),
            FilterAxis::Owner => self.owner.take().is_some(),
            FilterAxis::Visibility => self.visibility.take().is_some(),
            FilterAxis::ContentType => self.content_type.take().is_some(),
            FilterAxis::Size => self.size.take().is_some(),
            FilterAxis::Tag(id) => self.remove_tag(id),
        }
    }

    /// Every axis that currently deviates from its default, tags last
    #[must_use]
    pub fn active_axes(&self) -> Vec<FilterAxis> {
        let mut axes = Vec::new();
        if !self.search.trim().is_empty() {
            axes.push(FilterAxis::Search);
        }
        if self.owner.is_some() {
            axes.push(FilterAxis::Owner);
        }
        if self.visibility.is_some() {
            axes.push(FilterAxis::Visibility);
        }
        if self.content_type.is_some() {
            axes.push(FilterAxis::ContentType);
        }
        if self.size.is_some() {
            axes.push(FilterAxis::Size);
        }
        axes.extend(self.tags.iter().cloned().map(FilterAxis::Tag));
        axes
    }
}
