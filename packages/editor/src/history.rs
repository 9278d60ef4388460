//! # Undo/Redo History
//!
//! Linear snapshot history for the editor draft.
//!
//! ## Design
//!
//! - Each entry is a full snapshot of the section list at a checkpoint
//! - A cursor points at the snapshot matching the current draft
//! - Undo/redo move the cursor; the caller copies the snapshot back
//! - Pushing a snapshot drops every entry after the cursor
//! - Total length is capped; the oldest entries are evicted first
//!
//! Snapshots hold `Arc<PageSection>`s, so sections untouched between two
//! checkpoints are shared rather than copied.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//! history.reset(sections.clone());
//!
//! history.push(edited.clone());
//! let previous = history.undo().unwrap();
//! let edited_again = history.redo().unwrap();
//! ```

use chrono::{DateTime, Utc};
use pagekit_schema::PageSection;
use std::sync::Arc;

/// Maximum number of snapshots kept by default
pub const MAX_HISTORY_LENGTH: usize = 50;

/// Immutable snapshot of the draft sections
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub sections: Vec<Arc<PageSection>>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(sections: Vec<Arc<PageSection>>) -> Self {
        Self {
            sections,
            timestamp: Utc::now(),
        }
    }
}

/// Snapshot history with a cursor
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,

    /// Points at the snapshot matching the draft; meaningless when empty
    index: usize,

    /// Maximum number of snapshots (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// Create a history capped at [`MAX_HISTORY_LENGTH`]
    pub fn new() -> Self {
        Self::with_max_levels(MAX_HISTORY_LENGTH)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            max_levels,
        }
    }

    /// Replace everything with a single snapshot
    pub fn reset(&mut self, sections: Vec<Arc<PageSection>>) {
        self.entries = vec![HistoryEntry::new(sections)];
        self.index = 0;
    }

    /// Append a snapshot after the cursor, discarding the redo branch
    pub fn push(&mut self, sections: Vec<Arc<PageSection>>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }

        self.entries.push(HistoryEntry::new(sections));

        if self.max_levels > 0 && self.entries.len() > self.max_levels {
            let overflow = self.entries.len() - self.max_levels;
            self.entries.drain(..overflow);
        }

        self.index = self.entries.len() - 1;
    }

    /// Step back one snapshot, returning it
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward one snapshot, returning it
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.index < self.entries.len() - 1
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.index)
    }

    /// Cursor position, `None` when the history is empty
    pub fn index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_schema::{SectionConfig, SectionType};

    fn snapshot(ids: &[&str]) -> Vec<Arc<PageSection>> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| {
                Arc::new(
                    PageSection::new(*id, SectionConfig::default_for(SectionType::Faq))
                        .with_order(i as i32),
                )
            })
            .collect()
    }

    fn ids(entry: &HistoryEntry) -> Vec<&str> {
        entry.sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.index(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.max_levels(), MAX_HISTORY_LENGTH);
    }

    #[test]
    fn test_push_undo_redo() {
        let mut history = History::new();
        history.reset(snapshot(&["a"]));
        history.push(snapshot(&["a", "b"]));

        assert_eq!(history.len(), 2);
        assert!(history.can_undo());

        let previous = history.undo().unwrap();
        assert_eq!(ids(previous), vec!["a"]);
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let next = history.redo().unwrap();
        assert_eq!(ids(next), vec!["a", "b"]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_oldest_is_noop() {
        let mut history = History::new();
        history.reset(snapshot(&["a"]));

        assert!(history.undo().is_none());
        assert_eq!(history.index(), Some(0));
    }

    #[test]
    fn test_push_discards_redo_branch() {
        let mut history = History::new();
        history.reset(snapshot(&["a"]));
        history.push(snapshot(&["a", "b"]));
        history.push(snapshot(&["a", "b", "c"]));

        history.undo();
        history.undo();
        assert_eq!(history.index(), Some(0));

        history.push(snapshot(&["z"]));
        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(ids(history.current().unwrap()), vec!["z"]);
    }

    #[test]
    fn test_push_on_empty_history() {
        let mut history = History::new();
        history.push(snapshot(&["a"]));
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), Some(0));
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(3);
        history.reset(snapshot(&["0"]));

        for i in 1..6 {
            let id = i.to_string();
            history.push(snapshot(&[id.as_str()]));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), Some(2));
        assert_eq!(ids(&history.entries()[0]), vec!["3"]);
        assert_eq!(ids(history.current().unwrap()), vec!["5"]);
    }
}
