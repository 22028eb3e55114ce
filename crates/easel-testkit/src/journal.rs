//! Shared call journal.

use std::sync::Arc;

use parking_lot::Mutex;

/// Order-preserving journal shared by the test doubles.
///
/// Every double records its calls here, so a test can assert ordering
/// across components (clock before drain, render before present) against
/// one flat list. Clones share the same underlying journal.
#[derive(Clone, Default)]
pub struct TraceLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl TraceLog {
    /// An empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Snapshot of every entry recorded so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// How many times `entry` was recorded.
    #[must_use]
    pub fn count_of(&self, entry: &str) -> usize {
        self.entries.lock().iter().filter(|e| *e == entry).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
