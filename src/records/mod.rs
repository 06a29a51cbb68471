//! Record data model and loading
//!
//! Records are owned by the surrounding application and handed to the
//! explorer whole. The loaders here exist for the command-line host, which
//! reads a JSON array of records from disk.

pub mod types;

pub use types::{
    EntryAsset, EntryKind, Gallery, GalleryEntry, ImageAsset, ModelAsset, Owner, Record,
    RecordKind, Tag, Visibility, TYPE_CATEGORY,
};

use crate::FacetrError;
use std::fs;
use std::path::Path;

/// Parse a JSON array of records
///
/// # Errors
///
/// Returns `FacetrError::Json` if the text is not a valid record array.
pub fn from_json(text: &str) -> Result<Vec<Record>, FacetrError> {
    Ok(serde_json::from_str(text)?)
}

/// Load a JSON array of records from a file
///
/// # Errors
///
/// Returns `FacetrError::Io` if the file cannot be read, or
/// `FacetrError::Json` if its contents are not a valid record array.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, FacetrError> {
    let text = fs::read_to_string(path.as_ref())?;
    let records = from_json(&text)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        count = records.len(),
        "loaded records"
    );
    Ok(records)
}
