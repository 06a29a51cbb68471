//! Free-text search over records
//!
//! - [`normalize`]: text canonicalization shared by search and collation
//! - [`matcher`]: haystack construction and containment matching
//! - [`deferred`]: the lagging search value used while the user types

pub mod deferred;
pub mod matcher;
pub mod normalize;

pub use deferred::{DEFAULT_SEARCH_DELAY, DeferredQuery};
pub use matcher::{MatchMode, haystack, matches, matches_with};
pub use normalize::{normalize, normalize_str};
