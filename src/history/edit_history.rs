//! Linear undo/redo history for the lyrics buffer
//!
//! Every user-originated edit commits a full snapshot of the buffer. Undo and
//! redo move a cursor through the snapshots and hand back the text to restore;
//! restoring never commits a new entry.

/// Default number of snapshots kept before the oldest are evicted.
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// Snapshot history of the lyrics buffer.
///
/// Invariants:
/// - `entries` is never empty (it starts with the initial buffer, `""` by default)
/// - `index < entries.len()`
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<String>,
    index: usize,
    /// Maximum number of snapshots, `None` = unbounded
    limit: Option<usize>,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Creates a history holding only the empty buffer, bounded by
    /// [`DEFAULT_HISTORY_LIMIT`].
    pub fn new() -> Self {
        Self::with_initial(String::new(), Some(DEFAULT_HISTORY_LIMIT))
    }

    /// Creates a history whose first entry is `initial`.
    ///
    /// A limit of `Some(0)` is treated as `Some(1)` so the history can never
    /// become empty.
    pub fn with_initial(initial: String, limit: Option<usize>) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// Records `next` as the newest snapshot.
    ///
    /// Any redo entries beyond the current index are discarded first.
    pub fn commit(&mut self, next: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(next);
        self.index = self.entries.len() - 1;

        if let Some(limit) = self.limit
            && self.entries.len() > limit
        {
            let overflow = self.entries.len() - limit;
            self.entries.drain(..overflow);
            self.index -= overflow;
        }
    }

    /// Steps back one snapshot and returns it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Steps forward one snapshot and returns it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// The snapshot at the current index; always what the buffer should show.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the history always holds at least one snapshot.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "edit_history_tests.rs"]
mod edit_history_tests;
