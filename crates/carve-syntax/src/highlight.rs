//! Rule-driven highlighter.
//!
//! One full scan of the document per trigger, per category:
//!
//! 1. Resolve the display color (session override, else rule default).
//! 2. Scan the whole text for every token in the category's list:
//!    word-boundary-anchored for keywords, literal substring for
//!    operators and comment markers.
//! 3. Emit a span per occurrence.
//!
//! Ordering is explicit and deterministic: categories iterate keywords,
//! operators, comments; within a category spans are ascending by start
//! offset, and a start offset already claimed by an earlier-declared
//! token is not re-tagged. A display layer painting categories in
//! emission order therefore paints comments over operators over
//! keywords.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::rules::{self, RuleSet};
use crate::{Category, Span};

/// Per-session color overrides, keyed by category name.
pub type ColorOverrides = HashMap<String, String>;

static C_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(|| Highlighter::new(&rules::C_RULES));

static LUA_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(|| Highlighter::new(&rules::LUA_RULES));

/// A highlighter with keyword patterns compiled for one rule set.
pub struct Highlighter {
    rules: &'static RuleSet,
    /// One compiled `\b…\b` pattern per keyword, in declaration order
    keyword_patterns: Vec<Regex>,
}

impl Highlighter {
    /// Compiles the keyword patterns for a rule set.
    fn new(rules: &'static RuleSet) -> Self {
        let keyword_patterns = rules
            .keywords
            .iter()
            .map(|kw| {
                let pattern = format!(r"\b{}\b", regex::escape(kw));
                // Escaped static tokens always compile.
                Regex::new(&pattern).unwrap_or_else(|e| panic!("keyword pattern {pattern:?}: {e}"))
            })
            .collect();

        Self {
            rules,
            keyword_patterns,
        }
    }

    /// Returns the shared highlighter for a file extension, or `None`
    /// when the extension has no rules (plain text).
    pub fn for_extension(extension: &str) -> Option<&'static Highlighter> {
        let rules = rules::lookup(extension)?;
        if std::ptr::eq(rules, &rules::C_RULES) {
            Some(&C_HIGHLIGHTER)
        } else {
            Some(&LUA_HIGHLIGHTER)
        }
    }

    /// Returns the rule set this highlighter was compiled for.
    pub fn rules(&self) -> &'static RuleSet {
        self.rules
    }

    /// Computes the colored spans for a full document scan.
    ///
    /// Called with unchanged inputs this yields an identical span
    /// sequence; nothing here depends on prior state.
    pub fn highlight(&self, text: &str, overrides: &ColorOverrides) -> Vec<Span> {
        let mut spans = Vec::new();

        self.collect_keywords(text, overrides, &mut spans);
        self.collect_literals(
            text,
            Category::Operator,
            self.rules.operators,
            overrides,
            &mut spans,
        );
        self.collect_literals(
            text,
            Category::Comment,
            self.rules.comment_markers,
            overrides,
            &mut spans,
        );

        tracing::debug!(chars = text.chars().count(), spans = spans.len(), "highlight pass");
        spans
    }

    /// Resolves the display color for a category.
    fn resolve_color(&self, category: Category, overrides: &ColorOverrides) -> String {
        overrides
            .get(category.as_str())
            .cloned()
            .unwrap_or_else(|| self.rules.default_color(category).to_string())
    }

    /// Word-boundary-anchored keyword scan.
    fn collect_keywords(&self, text: &str, overrides: &ColorOverrides, out: &mut Vec<Span>) {
        let color = self.resolve_color(Category::Keyword, overrides);
        let mut claimed = HashSet::new();
        let mut spans = Vec::new();

        for pattern in &self.keyword_patterns {
            let mut offsets = ByteToChar::new(text);
            for m in pattern.find_iter(text) {
                let start = offsets.convert(m.start());
                let end = offsets.convert(m.end());
                if claimed.insert(start) {
                    spans.push(Span::new(Category::Keyword, start, end, color.clone()));
                }
            }
        }

        spans.sort_by_key(|s| s.start);
        out.extend(spans);
    }

    /// Literal substring scan for operators and comment markers.
    fn collect_literals(
        &self,
        text: &str,
        category: Category,
        tokens: &[&str],
        overrides: &ColorOverrides,
        out: &mut Vec<Span>,
    ) {
        let color = self.resolve_color(category, overrides);
        let mut claimed = HashSet::new();
        let mut spans = Vec::new();

        for token in tokens {
            if token.is_empty() {
                continue;
            }
            let width = token.chars().count();
            let mut offsets = ByteToChar::new(text);
            for (byte_idx, _) in text.match_indices(token) {
                let start = offsets.convert(byte_idx);
                if claimed.insert(start) {
                    spans.push(Span::new(category, start, start + width, color.clone()));
                }
            }
        }

        spans.sort_by_key(|s| s.start);
        out.extend(spans);
    }
}

/// Converts monotonically increasing byte offsets to character offsets
/// in a single forward walk.
struct ByteToChar<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> ByteToChar<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn convert(&mut self, byte_idx: usize) -> usize {
        debug_assert!(byte_idx >= self.byte, "offsets must be non-decreasing");
        self.chars += self.text[self.byte..byte_idx].chars().count();
        self.byte = byte_idx;
        self.chars
    }
}
