//! Facet filtering
//!
//! This module provides the independent, orthogonal filters of a list view:
//!
//! - **Owner**: exact owner id
//! - **Visibility**: public or private
//! - **Content type**: type tag for assets, entry kinds for galleries
//! - **Size bucket**: unknown / small / medium / large
//! - **Tags**: every selected tag id must be present
//!
//! Axes combine with AND. Option lists for the selection menus are derived
//! separately from the unfiltered records (see [`options`]).
//!
//! # Examples
//!
//! ```
//! use facetr::filters::{FilterState, SizeBucket, is_allowed};
//! # let records: Vec<facetr::records::Record> = Vec::new();
//!
//! let state = FilterState {
//!     size: Some(SizeBucket::Small),
//!     tags: vec!["t1".to_string()],
//!     ..FilterState::default()
//! };
//!
//! let small_tagged: Vec<_> = records.iter().filter(|r| is_allowed(r, &state)).collect();
//! ```

pub mod error;
pub mod facets;
pub mod options;
pub mod types;

pub use error::ParseError;
pub use facets::is_allowed;
pub use options::{FacetOption, FacetOptions};
pub use types::{ContentType, FilterAxis, FilterState, LARGE_THRESHOLD, MEDIUM_THRESHOLD, SizeBucket};
