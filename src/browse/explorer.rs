//! Explorer controller for one list view
//!
//! The explorer owns the filter, sort and page state of a list view and is
//! the only thing that mutates them. Every change goes through a named
//! transition, and the derived result (matching records in sorted order) is
//! recomputed from the raw records and current state, never patched.
//!
//! # Workflow
//!
//! ```text
//! records ──► search ∧ facets ──► sort ──► page window ──► ExplorerView
//!    │
//!    └──► facet options (unfiltered, so menus never shrink)
//! ```
//!
//! Any filter or sort transition that changes state resets the page window
//! to one batch; only [`Explorer::load_more`] grows it.
//!
//! # Examples
//!
//! ```
//! use facetr::browse::{Explorer, ViewKind};
//! use facetr::sort::SortOption;
//!
//! let mut explorer = Explorer::builder(ViewKind::Models)
//!     .batch_size(12)
//!     .default_sort(SortOption::Alpha)
//!     .build();
//!
//! explorer.set_search("neon");
//! let view = explorer.view();
//! println!("{}", view.summary());
//! ```

use crate::browse::chips::{ActiveFilterChip, active_chips};
use crate::browse::models::{ExplorerView, LoadMore, ViewKind, ViewStatus};
use crate::browse::pager::PageWindow;
use crate::config::FacetrConfig;
use crate::filters::{ContentType, FacetOptions, FilterAxis, FilterState, SizeBucket, is_allowed};
use crate::records::{Record, Visibility};
use crate::search::matcher::haystack_contains;
use crate::search::{DEFAULT_SEARCH_DELAY, DeferredQuery, MatchMode, haystack, normalize_str};
use crate::sort::SortOption;
use std::time::{Duration, Instant};
use tracing::debug;

/// Filter, sort and paging state of one list view
#[derive(Debug, Clone)]
pub struct Explorer {
    kind: ViewKind,
    records: Vec<Record>,
    /// Normalized haystack per record, parallel to `records`
    haystacks: Vec<String>,
    facets: FacetOptions,
    filter: FilterState,
    search: DeferredQuery,
    match_mode: MatchMode,
    sort: SortOption,
    default_sort: SortOption,
    page: PageWindow,
    loading: bool,
    /// Indices into `records` of matching records, in sorted order
    matches: Vec<usize>,
}

impl Explorer {
    /// Create a new builder for the given view
    #[must_use]
    pub fn builder(kind: ViewKind) -> ExplorerBuilder {
        ExplorerBuilder::new(kind)
    }

    /// Create an explorer using the settings configured for `kind`
    #[must_use]
    pub fn from_config(kind: ViewKind, config: &FacetrConfig) -> Self {
        let view = config.view(kind);
        Self::builder(kind)
            .batch_size(view.batch_size)
            .default_sort(view.default_sort)
            .match_mode(config.match_mode)
            .search_delay(config.search_delay())
            .build()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn kind(&self) -> ViewKind {
        self.kind
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> SortOption {
        self.sort
    }

    #[must_use]
    pub const fn page(&self) -> &PageWindow {
        &self.page
    }

    #[must_use]
    pub const fn facets(&self) -> &FacetOptions {
        &self.facets
    }

    #[must_use]
    pub const fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Raw text of the search box
    #[must_use]
    pub fn search_input(&self) -> &str {
        self.search.input()
    }

    /// Whether typed search text is waiting to be applied
    #[must_use]
    pub const fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Number of records passing the filters
    #[must_use]
    pub fn total(&self) -> usize {
        self.matches.len()
    }

    /// Every matching record in sorted order, ignoring the page window
    pub fn results(&self) -> impl Iterator<Item = &Record> + '_ {
        self.matches.iter().map(|&i| &self.records[i])
    }

    /// False while loading with nothing to show yet
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !(self.loading && self.records.is_empty())
    }

    /// Current chip list
    #[must_use]
    pub fn chips(&self) -> Vec<ActiveFilterChip> {
        active_chips(&self.filter, &self.facets)
    }

    /// Everything the list view renders
    #[must_use]
    pub fn view(&self) -> ExplorerView<'_> {
        let total = self.total();
        let items: Vec<&Record> = self
            .page
            .slice(&self.matches)
            .iter()
            .map(|&i| &self.records[i])
            .collect();

        let status = if !self.is_interactive() {
            ViewStatus::Loading
        } else if self.records.is_empty() {
            ViewStatus::Empty
        } else if total == 0 {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Showing
        };

        let load_more = self.page.has_more(total).then(|| LoadMore {
            next: self.page.next_batch(total),
            remaining: self.page.remaining(total),
        });

        ExplorerView {
            kind: self.kind,
            status,
            visible: items.len(),
            items,
            total,
            load_more,
            chips: self.chips(),
            facets: &self.facets,
            sort: self.sort,
            search_input: self.search.input(),
        }
    }

    // ------------------------------------------------------------------
    // Upstream input
    // ------------------------------------------------------------------

    /// Replace the whole record set
    ///
    /// Facet options are rebuilt from the new records, selections that
    /// reference ids no longer present are dropped, and the page window
    /// resets.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.haystacks = self.records.iter().map(haystack).collect();
        self.facets = FacetOptions::from_records(&self.records);
        self.drop_stale_selections();
        self.page.reset();
        self.recompute();
    }

    /// Mark whether the collaborator is still fetching records
    pub const fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn drop_stale_selections(&mut self) {
        let facets = &self.facets;
        if let Some(owner) = self.filter.owner.take_if(|o| !facets.has_owner(o)) {
            debug!(owner = %owner, "dropping stale owner selection");
        }

        self.filter.tags.retain(|tag| {
            let keep = facets.has_tag(tag);
            if !keep {
                debug!(tag = %tag, "dropping stale tag selection");
            }
            keep
        });

        // Gallery entry predicates never go stale; only type tag ids can vanish
        let stale_type = self.filter.content_type.take_if(|ct| {
            matches!(ct, ContentType::TypeTag(_)) && !facets.has_content_type(ct)
        });
        if let Some(content_type) = stale_type {
            debug!(content_type = %content_type.id(), "dropping stale content type selection");
        }
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Keystroke in the search box; the filter catches up on a later poll
    ///
    /// Returns false, ignoring the text, while the view is not interactive.
    pub fn set_search_input(&mut self, text: impl Into<String>, now: Instant) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.search.set_input(text, now);
        true
    }

    /// Apply pending search text if typing has paused long enough
    ///
    /// Returns true when the results were recomputed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        self.search.poll(now) && self.apply_search()
    }

    /// [`Explorer::poll_search`] at the current instant
    pub fn tick(&mut self) -> bool {
        self.poll_search(Instant::now())
    }

    /// Apply pending search text now
    pub fn flush_search(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.search.flush() && self.apply_search()
    }

    /// Set and apply search text in one step
    pub fn set_search(&mut self, text: impl Into<String>) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.search.replace(text);
        self.apply_search()
    }

    /// Copy the applied search text into the filter
    ///
    /// Surrounding whitespace never affects matching, so only a change in
    /// the trimmed text counts as a filter change.
    fn apply_search(&mut self) -> bool {
        let applied = self.search.applied();
        let changed = self.filter.search.trim() != applied.trim();
        self.filter.search = applied.to_string();
        if changed {
            self.filter_changed();
        }
        changed
    }

    // ------------------------------------------------------------------
    // Facets
    // ------------------------------------------------------------------

    /// Select an owner id, or `None` for all owners
    pub fn set_owner(&mut self, owner: Option<String>) -> bool {
        if !self.is_interactive() || self.filter.owner == owner {
            return false;
        }
        self.filter.owner = owner;
        self.filter_changed();
        true
    }

    pub fn set_visibility(&mut self, visibility: Option<Visibility>) -> bool {
        if !self.is_interactive() || self.filter.visibility == visibility {
            return false;
        }
        self.filter.visibility = visibility;
        self.filter_changed();
        true
    }

    pub fn set_content_type(&mut self, content_type: Option<ContentType>) -> bool {
        if !self.is_interactive() || self.filter.content_type == content_type {
            return false;
        }
        self.filter.content_type = content_type;
        self.filter_changed();
        true
    }

    pub fn set_size_bucket(&mut self, size: Option<SizeBucket>) -> bool {
        if !self.is_interactive() || self.filter.size == size {
            return false;
        }
        self.filter.size = size;
        self.filter_changed();
        true
    }

    /// Add a tag id to the selection
    ///
    /// Only ids offered in the tag facet are accepted; type tags are chosen
    /// through [`Explorer::set_content_type`] instead.
    pub fn add_tag(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if !self.is_interactive() || !self.accepts_tag(&id) {
            return false;
        }
        let changed = self.filter.add_tag(id);
        if changed {
            self.filter_changed();
        }
        changed
    }

    /// Remove a tag id from the selection
    pub fn remove_tag(&mut self, id: &str) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let changed = self.filter.remove_tag(id);
        if changed {
            self.filter_changed();
        }
        changed
    }

    /// Toggle a tag id; returns true if the tag is now selected
    ///
    /// Ids outside the tag facet, and any toggle while the view is not
    /// interactive, leave the selection as it is and report its current state.
    pub fn toggle_tag(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        let selected = self.filter.tags.contains(&id);
        if !self.is_interactive() || (!selected && !self.accepts_tag(&id)) {
            return selected;
        }
        let selected = self.filter.toggle_tag(id);
        self.filter_changed();
        selected
    }

    fn accepts_tag(&self, id: &str) -> bool {
        let known = self.facets.has_tag(id);
        if !known {
            debug!(tag = %id, "ignoring tag not offered by the tag facet");
        }
        known
    }

    // ------------------------------------------------------------------
    // Sort and paging
    // ------------------------------------------------------------------

    pub fn set_sort(&mut self, sort: SortOption) -> bool {
        if !self.is_interactive() || self.sort == sort {
            return false;
        }
        self.sort = sort;
        self.filter_changed();
        true
    }

    /// Reveal the next batch; the only transition that keeps the window
    pub fn load_more(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.page.load_more(self.total())
    }

    // ------------------------------------------------------------------
    // Clearing
    // ------------------------------------------------------------------

    /// Reset one axis to its default
    pub fn clear_axis(&mut self, axis: &FilterAxis) -> bool {
        if !self.is_interactive() {
            return false;
        }
        if *axis == FilterAxis::Search {
            self.search.clear();
        }
        let changed = self.filter.clear_axis(axis);
        if changed {
            self.filter_changed();
        }
        changed
    }

    /// Remove the filter a chip represents
    pub fn clear_chip(&mut self, chip: &ActiveFilterChip) -> bool {
        self.clear_axis(&chip.axis)
    }

    /// Reset every filter axis and the sort in one step
    ///
    /// Returns false if everything was already at its default.
    pub fn clear_all(&mut self) -> bool {
        let pristine = self.filter.is_empty()
            && self.search.input().is_empty()
            && self.sort == self.default_sort;
        if !self.is_interactive() || pristine {
            return false;
        }
        self.reset();
        true
    }

    /// Restore default filter, sort and page state unconditionally
    pub fn reset(&mut self) {
        self.filter = FilterState::default();
        self.search.clear();
        self.sort = self.default_sort;
        self.filter_changed();
    }

    // ------------------------------------------------------------------
    // Recomputation
    // ------------------------------------------------------------------

    fn filter_changed(&mut self) {
        self.page.reset();
        self.recompute();
    }

    fn recompute(&mut self) {
        let query = normalize_str(self.filter.search.trim());
        let mode = self.match_mode;

        let mut matches: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(i, record)| {
                (query.is_empty() || haystack_contains(&self.haystacks[*i], &query, mode))
                    && is_allowed(record, &self.filter)
            })
            .map(|(i, _)| i)
            .collect();

        let records = &self.records;
        self.sort.sort_with(&mut matches, |&i| &records[i]);
        self.matches = matches;

        debug!(
            view = %self.kind,
            records = self.records.len(),
            total = self.matches.len(),
            limit = self.page.limit(),
            sort = %self.sort,
            "recomputed explorer results"
        );
    }
}

/// Builder for `Explorer`
pub struct ExplorerBuilder {
    kind: ViewKind,
    batch_size: usize,
    default_sort: SortOption,
    match_mode: MatchMode,
    search_delay: Duration,
    records: Vec<Record>,
    loading: bool,
}

impl ExplorerBuilder {
    /// Builder with the view's default batch size and `recent` sort
    #[must_use]
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            batch_size: kind.default_batch_size(),
            default_sort: SortOption::default(),
            match_mode: MatchMode::default(),
            search_delay: DEFAULT_SEARCH_DELAY,
            records: Vec::new(),
            loading: false,
        }
    }

    #[must_use]
    pub const fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    #[must_use]
    pub const fn default_sort(mut self, sort: SortOption) -> Self {
        self.default_sort = sort;
        self
    }

    #[must_use]
    pub const fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[must_use]
    pub const fn search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    #[must_use]
    pub fn records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn build(self) -> Explorer {
        let mut explorer = Explorer {
            kind: self.kind,
            records: Vec::new(),
            haystacks: Vec::new(),
            facets: FacetOptions::default(),
            filter: FilterState::default(),
            search: DeferredQuery::new(self.search_delay),
            match_mode: self.match_mode,
            sort: self.default_sort,
            default_sort: self.default_sort,
            page: PageWindow::new(self.batch_size),
            loading: self.loading,
            matches: Vec::new(),
        };
        explorer.replace_records(self.records);
        explorer
    }
}
