//! # Carve Syntax
//!
//! Lexical, rule-driven syntax highlighting and literal text search.
//!
//! Highlighting here is deliberately not parsing: a static rule table
//! maps file extensions to keyword/operator/comment-marker lists, and
//! the highlighter re-scans the whole document on every trigger,
//! emitting colored spans. No syntax tree, no incremental state.
//! Documents are assumed editor-sized; the full re-scan is the accepted
//! cost model.

mod find;
mod highlight;
mod rules;

pub use find::{find, MATCH_COLOR};
pub use highlight::{ColorOverrides, Highlighter};
pub use rules::{lookup, RuleSet, FALLBACK_EXTENSION, RECOGNIZED_EXTENSIONS};

/// Highlight category a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Operator,
    Comment,
    /// A find-engine search match, distinct from syntax categories
    Match,
}

impl Category {
    /// Returns the category name used as a color-override key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Comment => "comment",
            Category::Match => "match",
        }
    }
}

/// A colored span over document text.
///
/// Offsets are character indices from the buffer start, half-open.
/// Spans are transient: they are recomputed whenever the document or
/// the color settings change, and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub category: Category,
    pub start: usize,
    pub end: usize,
    /// Display color, already resolved against overrides
    pub color: String,
}

impl Span {
    pub fn new(category: Category, start: usize, end: usize, color: impl Into<String>) -> Self {
        Self {
            category,
            start,
            end,
            color: color.into(),
        }
    }

    /// Width of the span in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
