//! Facet option lists for selection menus
//!
//! Options are always derived from the full, unfiltered record set so that a
//! menu keeps offering every value while the user narrows the results.

use crate::filters::types::{ContentType, SizeBucket};
use crate::records::{Record, Visibility};
use crate::search::normalize_str;
use std::collections::HashMap;

/// One selectable value of a facet with the number of records carrying it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
    pub count: usize,
}

impl FacetOption {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, count: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count,
        }
    }
}

/// Option lists for every facet of a record set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub owners: Vec<FacetOption>,
    pub visibility: Vec<FacetOption>,
    pub content_types: Vec<FacetOption>,
    pub sizes: Vec<FacetOption>,
    pub tags: Vec<FacetOption>,
}

/// Counts values in first-seen order
#[derive(Default)]
struct Tally {
    options: Vec<FacetOption>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn bump(&mut self, id: &str, label: &str) {
        if let Some(&i) = self.index.get(id) {
            self.options[i].count += 1;
        } else {
            self.index.insert(id.to_string(), self.options.len());
            self.options.push(FacetOption::new(id, label, 1));
        }
    }

    fn sorted_by_label(mut self) -> Vec<FacetOption> {
        self.options.sort_by_cached_key(|o| normalize_str(&o.label));
        self.options
    }
}

impl FacetOptions {
    /// Derive every option list from `records`
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut owners = Tally::default();
        let mut tags = Tally::default();
        let mut type_tags = Tally::default();
        let mut visibility: HashMap<Visibility, usize> = HashMap::new();
        let mut sizes: HashMap<SizeBucket, usize> = HashMap::new();
        let mut gallery_types: HashMap<&'static str, usize> = HashMap::new();

        for record in records {
            let owner_label = if record.owner.display_name.is_empty() {
                &record.owner.id
            } else {
                &record.owner.display_name
            };
            owners.bump(&record.owner.id, owner_label);

            *visibility.entry(record.visibility).or_default() += 1;

            if record.is_gallery() {
                let entries = record.entries();
                if entries.iter().any(|e| e.is_image()) {
                    *gallery_types.entry("has-images").or_default() += 1;
                }
                if entries.iter().any(|e| e.is_model()) {
                    *gallery_types.entry("has-models").or_default() += 1;
                }
                if entries.is_empty() {
                    *gallery_types.entry("empty").or_default() += 1;
                }
            } else {
                *sizes.entry(SizeBucket::of(record)).or_default() += 1;
            }

            // A tag listed twice on one record still counts the record once
            let mut seen: Vec<&str> = Vec::new();
            for tag in record.tags() {
                if seen.contains(&tag.id.as_str()) {
                    continue;
                }
                seen.push(&tag.id);
                if tag.is_type() {
                    type_tags.bump(&ContentType::TypeTag(tag.id.clone()).id(), &tag.label);
                } else {
                    tags.bump(&tag.id, &tag.label);
                }
            }
        }

        let visibility = Visibility::ALL
            .into_iter()
            .filter_map(|v| {
                visibility
                    .get(&v)
                    .map(|&count| FacetOption::new(v.as_str(), v.label(), count))
            })
            .collect();

        let sizes = SizeBucket::ALL
            .into_iter()
            .filter_map(|b| {
                sizes
                    .get(&b)
                    .map(|&count| FacetOption::new(b.as_str(), b.label(), count))
            })
            .collect();

        let mut content_types = type_tags.sorted_by_label();
        for (content_type, label) in [
            (ContentType::HasImages, "Has images"),
            (ContentType::HasModels, "Has models"),
            (ContentType::NoEntries, "Empty"),
        ] {
            let id = content_type.id();
            if let Some(&count) = gallery_types.get(id.as_str()) {
                content_types.push(FacetOption::new(id, label, count));
            }
        }

        Self {
            owners: owners.sorted_by_label(),
            visibility,
            content_types,
            sizes,
            tags: tags.sorted_by_label(),
        }
    }

    /// Whether an owner id occurs in the record set
    #[must_use]
    pub fn has_owner(&self, id: &str) -> bool {
        self.owners.iter().any(|o| o.id == id)
    }

    /// Whether a (non-type) tag id occurs in the record set
    #[must_use]
    pub fn has_tag(&self, id: &str) -> bool {
        self.tags.iter().any(|o| o.id == id)
    }

    /// Whether a content-type selection can still match anything
    #[must_use]
    pub fn has_content_type(&self, content_type: &ContentType) -> bool {
        let id = content_type.id();
        self.content_types.iter().any(|o| o.id == id)
    }

    /// Label of an owner id, if known
    #[must_use]
    pub fn owner_label(&self, id: &str) -> Option<&str> {
        self.owners
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
    }

    /// Label of a tag id, if known
    #[must_use]
    pub fn tag_label(&self, id: &str) -> Option<&str> {
        self.tags.iter().find(|o| o.id == id).map(|o| o.label.as_str())
    }

    /// Label of a content-type selection, if known
    #[must_use]
    pub fn content_type_label(&self, content_type: &ContentType) -> Option<&str> {
        let id = content_type.id();
        self.content_types
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
    }
}
