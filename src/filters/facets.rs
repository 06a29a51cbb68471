//! Facet predicates
//!
//! A record is allowed when every facet axis accepts it. Each axis accepts
//! everything when it is unset ("all"), so unsetting an axis can only widen
//! the result.

use crate::filters::types::{ContentType, FilterState, SizeBucket};
use crate::records::{Record, Visibility};

/// Evaluate every facet axis of `state` against `record`
///
/// The search axis is not evaluated here; see [`crate::search::matcher`].
#[must_use]
pub fn is_allowed(record: &Record, state: &FilterState) -> bool {
    visibility_allows(record, state.visibility)
        && owner_allows(record, state.owner.as_deref())
        && content_type_allows(record, state.content_type.as_ref())
        && size_allows(record, state.size)
        && tags_allow(record, &state.tags)
}

#[must_use]
pub fn visibility_allows(record: &Record, selected: Option<Visibility>) -> bool {
    selected.is_none_or(|v| record.visibility == v)
}

#[must_use]
pub fn owner_allows(record: &Record, selected: Option<&str>) -> bool {
    selected.is_none_or(|id| record.owner.id == id)
}

#[must_use]
pub fn content_type_allows(record: &Record, selected: Option<&ContentType>) -> bool {
    let Some(content_type) = selected else {
        return true;
    };

    match content_type {
        ContentType::TypeTag(id) => record.type_tag().is_some_and(|t| &t.id == id),
        ContentType::HasImages => record.entries().iter().any(|e| e.is_image()),
        ContentType::HasModels => record.entries().iter().any(|e| e.is_model()),
        ContentType::NoEntries => record.is_gallery() && record.entries().is_empty(),
    }
}

#[must_use]
pub fn size_allows(record: &Record, selected: Option<SizeBucket>) -> bool {
    selected.is_none_or(|bucket| SizeBucket::of(record) == bucket)
}

/// The record must carry every selected tag id
///
/// Only non-type tags take part; type tags belong to the content-type axis.
#[must_use]
pub fn tags_allow(record: &Record, selected: &[String]) -> bool {
    selected.iter().all(|id| {
        record
            .tags()
            .iter()
            .any(|tag| !tag.is_type() && &tag.id == id)
    })
}
