//! Literal substring search over document text.
//!
//! A single forward scan: case-sensitive, non-overlapping, left to
//! right. Each match span is exactly the needle's character width and
//! scanning resumes after the match end, so overlapping occurrences are
//! not reported. The scan is pure; the session owns clearing previous
//! match spans and reporting the count.

use crate::{Category, Span};

/// Display color for search-match spans.
pub const MATCH_COLOR: &str = "yellow";

/// Finds all non-overlapping occurrences of `needle` in `text`.
///
/// Spans are character offsets, ascending, tagged [`Category::Match`].
/// An empty needle yields no matches (guarding the zero-width scan),
/// not an error.
pub fn find(text: &str, needle: &str) -> Vec<Span> {
    if needle.is_empty() {
        return Vec::new();
    }

    let width = needle.chars().count();
    let mut spans = Vec::new();
    let mut byte = 0;
    let mut char_pos = 0;

    while let Some(rel) = text[byte..].find(needle) {
        char_pos += text[byte..byte + rel].chars().count();
        spans.push(Span::new(
            Category::Match,
            char_pos,
            char_pos + width,
            MATCH_COLOR,
        ));
        byte += rel + needle.len();
        char_pos += width;
    }

    tracing::debug!(needle, matches = spans.len(), "find scan");
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
        find(text, needle).iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_finds_all_occurrences_in_order() {
        assert_eq!(ranges("the cat and the dog", "the"), vec![(0, 3), (12, 15)]);
    }

    #[test]
    fn test_spans_are_needle_width_and_disjoint() {
        let spans = find("abcabcabc", "abc");
        assert_eq!(spans.len(), 3);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for span in &spans {
            assert_eq!(span.len(), 3);
            assert_eq!(span.category, Category::Match);
        }
    }

    #[test]
    fn test_overlapping_occurrences_are_skipped() {
        // "aa" in "aaaa": scanning resumes after each match.
        assert_eq!(ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_empty_needle_is_noop() {
        assert!(find("some text", "").is_empty());
    }

    #[test]
    fn test_no_matches() {
        assert!(find("some text", "missing").is_empty());
        assert!(find("", "needle").is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(find("The cat", "the").is_empty());
    }

    #[test]
    fn test_offsets_are_characters() {
        // "né" is two characters but three bytes.
        assert_eq!(ranges("né abc", "abc"), vec![(3, 6)]);
    }
}
