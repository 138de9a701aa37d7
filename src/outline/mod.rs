//! Code outline extraction
//!
//! Line-oriented pattern scanning of script and stylesheet text.
//! Used by the outline panel to show a flat, navigable list of functions or selectors.

mod extract;
mod matcher;

pub use extract::{build_outline, script_pattern, stylesheet_pattern};
pub use matcher::scan;

use serde::Serialize;

/// A raw scanner hit, before display filtering
///
/// Field order matters: the derived ordering sorts by name, then line, then column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchTuple {
    /// Captured identifier or selector, trimmed (may be empty)
    pub name: String,
    /// 0-based line the match starts on
    pub line: usize,
    /// Length of the matched line in characters; entries jump to end-of-line
    ///
    /// Counts `char`s, not UTF-16 code units, so a character outside the BMP adds one.
    pub column: usize,
}

/// Category used for styling rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryCategory {
    Function,
    Id,
    Class,
    Font,
    Tag,
}

impl EntryCategory {
    /// Classify a stylesheet selector by its first character
    pub fn from_selector(selector: &str) -> Self {
        match selector.chars().next() {
            Some('#') => EntryCategory::Id,
            Some('.') => EntryCategory::Class,
            Some('@') => EntryCategory::Font,
            _ => EntryCategory::Tag,
        }
    }

    /// Short label for rendering and row styling
    pub fn label(&self) -> &'static str {
        match self {
            EntryCategory::Function => "function",
            EntryCategory::Id => "id",
            EntryCategory::Class => "class",
            EntryCategory::Font => "font",
            EntryCategory::Tag => "tag",
        }
    }
}

/// A single renderable, navigable outline row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OutlineEntry {
    pub label: String,
    pub category: EntryCategory,
    /// 0-based navigation line
    #[serde(rename = "line")]
    pub target_line: usize,
    /// Navigation column (always the end of the line)
    #[serde(rename = "column")]
    pub target_column: usize,
}

impl OutlineEntry {
    pub fn new(label: impl Into<String>, category: EntryCategory, tuple: &MatchTuple) -> Self {
        Self {
            label: label.into(),
            category,
            target_line: tuple.line,
            target_column: tuple.column,
        }
    }
}
