//! Record types supplied by the data layer
//!
//! These are pure data structures: the explorer never mutates them. Every
//! optional or collection field deserializes with a default so that a record
//! with missing fields degrades to "unknown" instead of failing to load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag category that marks a content-type tag (e.g. "checkpoint", "lora")
pub const TYPE_CATEGORY: &str = "type";

/// Owner of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
}

impl Owner {
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A tag attached to a model or image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub category: String,
}

impl Tag {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: category.into(),
        }
    }

    /// Whether this tag names the content type rather than a free label
    #[must_use]
    pub fn is_type(&self) -> bool {
        self.category.eq_ignore_ascii_case(TYPE_CATEGORY)
    }
}

/// Public/private flag of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub const ALL: [Self; 2] = [Self::Public, Self::Private];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A browsable record: model asset, image asset or gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub owner: Owner,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(flatten)]
    pub kind: RecordKind,
}

/// Variant-specific data of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordKind {
    Model(ModelAsset),
    Image(ImageAsset),
    Gallery(Gallery),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAsset {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version_label: Option<String>,
    /// Storage object name / path
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub file_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub file_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub entries: Vec<GalleryEntry>,
}

/// One slot of a gallery: at most one referenced asset plus an optional note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: String,
    #[serde(default)]
    pub asset: Option<EntryAsset>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Image,
    Model,
}

/// Asset referenced from a gallery entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAsset {
    pub kind: EntryKind,
    pub id: String,
    #[serde(default)]
    pub title: String,
}

impl GalleryEntry {
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.asset.as_ref().is_some_and(|a| a.kind == EntryKind::Image)
    }

    #[must_use]
    pub fn is_model(&self) -> bool {
        self.asset.as_ref().is_some_and(|a| a.kind == EntryKind::Model)
    }
}

impl Record {
    /// Tags of the record; galleries carry none
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match &self.kind {
            RecordKind::Model(m) => &m.tags,
            RecordKind::Image(i) => &i.tags,
            RecordKind::Gallery(_) => &[],
        }
    }

    /// Recorded byte size, if any
    #[must_use]
    pub fn file_size(&self) -> Option<u64> {
        match &self.kind {
            RecordKind::Model(m) => m.file_size,
            RecordKind::Image(i) => i.file_size,
            RecordKind::Gallery(_) => None,
        }
    }

    /// Gallery entries; empty for non-gallery records
    #[must_use]
    pub fn entries(&self) -> &[GalleryEntry] {
        match &self.kind {
            RecordKind::Gallery(g) => &g.entries,
            _ => &[],
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match &self.kind {
            RecordKind::Model(m) => m.description.as_deref(),
            RecordKind::Image(i) => i.description.as_deref(),
            RecordKind::Gallery(g) => g.description.as_deref(),
        }
    }

    /// The content-type tag of the record, if it carries one
    #[must_use]
    pub fn type_tag(&self) -> Option<&Tag> {
        self.tags().iter().find(|t| t.is_type())
    }

    #[must_use]
    pub const fn is_gallery(&self) -> bool {
        matches!(self.kind, RecordKind::Gallery(_))
    }
}
