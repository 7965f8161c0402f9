//! Snapshot-based undo/redo history.
//!
//! Each discrete edit captures the full pre-edit buffer text. Whole
//! snapshots trade memory for simplicity: restoring a state is a single
//! string swap, and there is no patch application that could drift out
//! of sync with the buffer.
//!
//! ## Design Decisions
//!
//! 1. **Bounded ring**: the undo stack is a fixed-depth `VecDeque` that
//!    evicts the oldest snapshot at capacity, so a long session cannot
//!    grow history without limit.
//! 2. **Redo survives fresh edits**: capturing a new snapshot does not
//!    clear the redo stack. Redoing after a fresh edit restores the
//!    previously undone snapshot over it. This matches the behavior the
//!    editor has always had and is covered by a test.

use std::collections::VecDeque;

/// Default number of snapshots retained before eviction.
pub const DEFAULT_DEPTH: usize = 1000;

/// Undo/redo stacks of whole-buffer text snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots restorable via undo, oldest at the front
    undo_stack: VecDeque<String>,
    /// Snapshots restorable via redo
    redo_stack: Vec<String>,
    /// Maximum snapshots kept on either stack
    max_depth: usize,
}

impl History {
    /// Creates a history retaining at most `max_depth` snapshots.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Records the pre-edit text of a discrete edit.
    ///
    /// Call once before each mutating edit. The redo stack is left
    /// intact (see module docs).
    pub fn capture(&mut self, snapshot: impl Into<String>) {
        self.undo_stack.push_back(snapshot.into());
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    /// Pops the most recent snapshot, pushing `current` onto the redo
    /// stack. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.undo_stack.pop_back()?;
        self.redo_stack.push(current.to_string());
        while self.redo_stack.len() > self.max_depth {
            self.redo_stack.remove(0);
        }
        Some(snapshot)
    }

    /// Pops the most recent redo snapshot, pushing `current` onto the
    /// undo stack. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push_back(current.to_string());
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        Some(snapshot)
    }

    /// Returns true if there are snapshots to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drops all snapshots.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Returns the number of undo steps available.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns the number of redo steps available.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_undo_redo_cycle() {
        let mut history = History::new(100);

        history.capture("");
        history.capture("a");

        assert!(history.can_undo());
        assert_eq!(history.undo("ab").as_deref(), Some("a"));
        assert_eq!(history.undo("a").as_deref(), Some(""));
        assert!(!history.can_undo());

        assert_eq!(history.redo("").as_deref(), Some("a"));
        assert_eq!(history.redo("a").as_deref(), Some("ab"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut history = History::new(100);
        assert_eq!(history.undo("text"), None);
        assert_eq!(history.redo("text"), None);
        assert_eq!(history.undo_count(), 0);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn test_bounded_ring_evicts_oldest() {
        let mut history = History::new(2);

        history.capture("first");
        history.capture("second");
        history.capture("third");

        assert_eq!(history.undo_count(), 2);
        assert_eq!(history.undo("now").as_deref(), Some("third"));
        assert_eq!(history.undo("third").as_deref(), Some("second"));
        // "first" was evicted at capacity
        assert_eq!(history.undo("second"), None);
    }

    #[test]
    fn test_capture_preserves_redo_stack() {
        let mut history = History::new(100);

        history.capture("old");
        history.undo("newer");
        assert_eq!(history.redo_count(), 1);

        // A fresh edit after undo leaves the redo snapshot in place.
        history.capture("old");
        assert_eq!(history.redo_count(), 1);
        assert_eq!(history.redo("edited").as_deref(), Some("newer"));
    }
}
