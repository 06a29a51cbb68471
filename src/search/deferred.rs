//! Deferred search input
//!
//! The text shown in the search box updates on every keystroke, while the
//! value used for filtering only catches up once typing has paused for
//! `delay`. A burst of edits collapses into a single application of the
//! latest text; intermediate values are never applied.
//!
//! There is no timer thread. The host calls [`DeferredQuery::poll`] from its
//! tick/event loop, and the pending value is read at that moment, so a stale
//! input can never overwrite a newer one.

use std::time::{Duration, Instant};

/// Default pause before typed text is applied
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(150);

/// Search text with a lagging "applied" value
#[derive(Debug, Clone)]
pub struct DeferredQuery {
    /// Raw text as typed (display value)
    input: String,
    /// Text currently used for filtering
    applied: String,
    /// Time of the last unapplied edit
    pending_since: Option<Instant>,
    delay: Duration,
}

impl DeferredQuery {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            input: String::new(),
            applied: String::new(),
            pending_since: None,
            delay,
        }
    }

    /// The text to display in the search box
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The text currently used for filtering
    #[must_use]
    pub fn applied(&self) -> &str {
        &self.applied
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an edit is waiting to be applied
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Record a keystroke; restarts the delay
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.pending_since = Some(now);
    }

    /// Apply the latest input if typing has paused for at least `delay`
    ///
    /// Returns true when the applied value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_duration_since(since) >= self.delay => self.flush(),
            _ => false,
        }
    }

    /// Apply the latest input immediately
    ///
    /// Returns true when the applied value changed.
    pub fn flush(&mut self) -> bool {
        self.pending_since = None;
        if self.applied == self.input {
            return false;
        }
        self.applied.clone_from(&self.input);
        tracing::trace!(query = %self.applied, "applied deferred search");
        true
    }

    /// Set both values at once, dropping any pending edit
    pub fn replace(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.applied.clone_from(&self.input);
        self.pending_since = None;
    }

    /// Clear both values
    pub fn clear(&mut self) {
        self.replace(String::new());
    }
}

impl Default for DeferredQuery {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_input_updates_immediately_applied_lags() {
        let start = Instant::now();
        let mut query = DeferredQuery::new(DELAY);

        query.set_input("ne", start);
        assert_eq!(query.input(), "ne");
        assert_eq!(query.applied(), "");
        assert!(query.is_pending());

        assert!(!query.poll(start + Duration::from_millis(50)));
        assert_eq!(query.applied(), "");

        assert!(query.poll(start + DELAY));
        assert_eq!(query.applied(), "ne");
        assert!(!query.is_pending());
    }

    #[test]
    fn test_burst_coalesces_to_latest() {
        let start = Instant::now();
        let mut query = DeferredQuery::new(DELAY);

        query.set_input("n", start);
        query.set_input("ne", start + Duration::from_millis(40));
        query.set_input("neo", start + Duration::from_millis(80));
        query.set_input("neon", start + Duration::from_millis(120));

        // 100ms after the first key but only 20ms after the last one
        assert!(!query.poll(start + Duration::from_millis(140)));
        assert_eq!(query.applied(), "");

        assert!(query.poll(start + Duration::from_millis(220)));
        assert_eq!(query.applied(), "neon");
    }

    #[test]
    fn test_poll_without_change_reports_false() {
        let start = Instant::now();
        let mut query = DeferredQuery::new(DELAY);
        query.set_input("", start);
        assert!(!query.poll(start + DELAY));
        assert!(!query.is_pending());
    }

    #[test]
    fn test_flush_applies_now() {
        let mut query = DeferredQuery::new(DELAY);
        query.set_input("cat", Instant::now());
        assert!(query.flush());
        assert_eq!(query.applied(), "cat");
        assert!(!query.flush());
    }

    #[test]
    fn test_clear_drops_pending() {
        let start = Instant::now();
        let mut query = DeferredQuery::new(DELAY);
        query.set_input("dog", start);
        query.clear();
        assert!(!query.is_pending());
        assert!(!query.poll(start + DELAY));
        assert_eq!(query.input(), "");
        assert_eq!(query.applied(), "");
    }
}
