//! Static language rule table.
//!
//! Maps file extensions to keyword/operator/comment-marker lists and
//! default category colors. The table is process-wide, read-only
//! configuration; an unrecognized extension means plain text (no
//! highlighting), which is the documented default rather than an error.

use crate::Category;

/// Extensions the editor recognizes when normalizing a save path.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["c", "h", "txt", "lua"];

/// Suffix appended to a save path whose extension is unrecognized.
pub const FALLBACK_EXTENSION: &str = "c";

/// The highlighting rules for one file extension.
///
/// Token lists are ordered: declaration order is match priority when
/// spans would otherwise start at the same offset.
#[derive(Debug)]
pub struct RuleSet {
    pub keywords: &'static [&'static str],
    pub operators: &'static [&'static str],
    pub comment_markers: &'static [&'static str],
    pub keyword_color: &'static str,
    pub operator_color: &'static str,
    pub comment_color: &'static str,
}

impl RuleSet {
    /// Returns the default display color for a syntax category.
    pub fn default_color(&self, category: Category) -> &'static str {
        match category {
            Category::Keyword => self.keyword_color,
            Category::Operator => self.operator_color,
            Category::Comment => self.comment_color,
            Category::Match => crate::MATCH_COLOR,
        }
    }
}

pub(crate) static C_RULES: RuleSet = RuleSet {
    keywords: &[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
        "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
        "void", "volatile", "while",
    ],
    operators: &[
        "+", "-", "*", "/", "%", "=", "==", "!=", ">", "<", ">=", "<=", "&&", "||", "!", "&", "|",
        "~", "^", "<<", ">>",
    ],
    comment_markers: &["//", "/*", "*/"],
    keyword_color: "blue",
    operator_color: "purple",
    comment_color: "green",
};

pub(crate) static LUA_RULES: RuleSet = RuleSet {
    keywords: &[
        "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
        "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
    ],
    operators: &["+", "-", "*", "/", "%", "=", "==", "~=", "<", ">", "<=", ">="],
    comment_markers: &["--"],
    keyword_color: "blue",
    operator_color: "purple",
    comment_color: "green",
};

/// Looks up the rule set for a file extension.
///
/// The extension may carry a leading dot and is matched
/// case-insensitively. Returns `None` for extensions without rules,
/// including recognized plain-text ones like `txt`.
pub fn lookup(extension: &str) -> Option<&'static RuleSet> {
    match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
        "c" | "h" => Some(&C_RULES),
        "lua" => Some(&LUA_RULES),
        _ => None,
    }
}
