//! Incremental "load more" paging
//!
//! The pager is mechanical: it slices a prefix and grows a limit. Deciding
//! *when* the limit resets (any filter or sort change) is the explorer's job.

/// Visible prefix of `items`: the first `min(limit, len)` elements
#[must_use]
pub fn window<T>(items: &[T], limit: usize) -> &[T] {
    &items[..limit.min(items.len())]
}

/// Next limit after one "load more": `min(total, limit + batch_size)`
#[must_use]
pub fn grow(limit: usize, batch_size: usize, total: usize) -> usize {
    total.min(limit.saturating_add(batch_size))
}

/// Size of the visible window over a filtered, sorted list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    limit: usize,
    batch_size: usize,
}

impl PageWindow {
    /// New window showing one batch; a zero batch size is treated as 1
    #[must_use]
    pub fn new(batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            limit: batch_size,
            batch_size,
        }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Back to a single batch
    pub const fn reset(&mut self) {
        self.limit = self.batch_size;
    }

    /// Grow by one batch, clamped to `total`
    ///
    /// Never shrinks: when the limit already exceeds `total` (the initial
    /// batch over a short list) it is left alone. Returns true if it grew.
    pub fn load_more(&mut self, total: usize) -> bool {
        let next = grow(self.limit, self.batch_size, total);
        if next > self.limit {
            self.limit = next;
            true
        } else {
            false
        }
    }

    /// Number of items actually visible out of `total`
    #[must_use]
    pub fn visible(&self, total: usize) -> usize {
        self.limit.min(total)
    }

    /// Items not yet visible
    #[must_use]
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible(total))
    }

    /// How many items the next "load more" would add
    #[must_use]
    pub fn next_batch(&self, total: usize) -> usize {
        self.batch_size.min(self.remaining(total))
    }

    /// Whether a "load more" affordance should be shown
    #[must_use]
    pub fn has_more(&self, total: usize) -> bool {
        self.remaining(total) > 0
    }

    /// Visible prefix of `items`
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        window(items, self.limit)
    }
}
