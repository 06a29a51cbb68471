//! Browse module - explorer state for list views
//!
//! This module ties search, facet filters, sorting and paging together for
//! one list view (model library, image gallery, gallery of galleries). It is
//! UI-agnostic: the host feeds records and user input in, and renders the
//! derived [`ExplorerView`].
//!
//! # Architecture
//!
//! - `explorer`: the controller owning filter/sort/page state
//! - `pager`: stateless window slicing and growth
//! - `chips`: active filter chips with per-axis clearing
//! - `models`: derived view data (status, counts, load-more affordance)

pub mod chips;
pub mod explorer;
pub mod models;
pub mod pager;

pub use chips::{ActiveFilterChip, active_chips};
pub use explorer::{Explorer, ExplorerBuilder};
pub use models::{ExplorerView, LoadMore, ViewKind, ViewStatus};
pub use pager::{PageWindow, grow, window};
