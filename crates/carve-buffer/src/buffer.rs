//! Core text buffer implementation backed by a rope.
//!
//! The rope keeps mid-buffer insertions and deletions cheap, while the
//! undo/redo model stays deliberately simple: every mutating edit
//! captures the full pre-edit text as a snapshot (see [`History`]).
//! Offsets throughout are character indices, not bytes.

use ropey::Rope;
use std::ops::Range;

use crate::history::{History, DEFAULT_DEPTH};
use crate::{BufferError, BufferResult};

/// A text buffer with snapshot-based undo/redo.
///
/// The buffer is owned by a single session and mutated only in response
/// to discrete user-triggered actions; it is `Send` but not shared
/// across threads.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The rope holding the text content
    rope: Rope,

    /// Snapshot history for undo/redo
    history: History,

    /// Whether the buffer has unsaved changes
    modified: bool,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    pub fn new() -> Self {
        Self::with_history_depth(DEFAULT_DEPTH)
    }

    /// Creates an empty buffer with a custom history depth.
    pub fn with_history_depth(depth: usize) -> Self {
        Self {
            rope: Rope::new(),
            history: History::new(depth),
            modified: false,
        }
    }

    // ==================== Text Access ====================

    /// Returns the entire text content.
    ///
    /// Borrowed for buffers spanning a single rope chunk, allocated
    /// otherwise.
    #[inline]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a specific line (0-indexed), including its trailing
    /// newline if present.
    pub fn line(&self, line_idx: usize) -> BufferResult<std::borrow::Cow<'_, str>> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::LineOutOfBounds(line_idx));
        }
        Ok(self.rope.line(line_idx).into())
    }

    /// Returns a slice of text by character range.
    pub fn slice(&self, range: Range<usize>) -> BufferResult<std::borrow::Cow<'_, str>> {
        if range.end > self.len_chars() || range.start > range.end {
            return Err(BufferError::InvalidCharIndex(range.end));
        }
        Ok(self.rope.slice(range).into())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line; a trailing `\n` counts the empty
    /// line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    // ==================== Mutations ====================

    /// Inserts text at a character index.
    ///
    /// Captures a pre-edit snapshot for undo before mutating.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> BufferResult<()> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }

        let snapshot = self.text().into_owned();
        self.history.capture(snapshot);
        self.rope.insert(char_idx, text);
        self.modified = true;

        Ok(())
    }

    /// Deletes text in a character range, returning the removed text.
    pub fn delete(&mut self, range: Range<usize>) -> BufferResult<String> {
        if range.end > self.len_chars() || range.start > range.end {
            return Err(BufferError::InvalidCharIndex(range.end));
        }

        let snapshot = self.text().into_owned();
        self.history.capture(snapshot);
        let deleted: String = self.rope.slice(range.clone()).into();
        self.rope.remove(range);
        self.modified = true;

        Ok(deleted)
    }

    /// Replaces text in a range with new text as a single undo step.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> BufferResult<String> {
        if range.end > self.len_chars() || range.start > range.end {
            return Err(BufferError::InvalidCharIndex(range.end));
        }

        let snapshot = self.text().into_owned();
        self.history.capture(snapshot);
        let replaced: String = self.rope.slice(range.clone()).into();
        self.rope.remove(range.clone());
        self.rope.insert(range.start, text);
        self.modified = true;

        Ok(replaced)
    }

    // ==================== Undo/Redo ====================

    /// Restores the most recent snapshot.
    ///
    /// Returns false (and leaves the buffer untouched) when there is
    /// nothing to undo; an empty stack is a no-op, not an error.
    pub fn undo(&mut self) -> bool {
        let current = self.text().into_owned();
        match self.history.undo(&current) {
            Some(snapshot) => {
                self.rope = Rope::from_str(&snapshot);
                self.modified = true;
                true
            }
            None => false,
        }
    }

    /// Restores the most recently undone snapshot.
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.text().into_owned();
        match self.history.redo(&current) {
            Some(snapshot) => {
                self.rope = Rope::from_str(&snapshot);
                self.modified = true;
                true
            }
            None => false,
        }
    }

    /// Returns true if there are snapshots to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if there are snapshots to redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drops all history, e.g. when the session starts a new document.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Marks the buffer as saved.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            history: History::new(DEFAULT_DEPTH),
            modified: false,
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
