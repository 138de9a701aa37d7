//! Dialect identification and detection
//!
//! Maps host language names and file extensions to the two outlined dialects.

use std::path::Path;

/// Source dialects the outline understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// JavaScript-style code: functions are outlined
    Script,
    /// CSS-style code: selectors are outlined
    Stylesheet,
    #[default]
    Unrecognized,
}

impl Dialect {
    /// Resolve a dialect from the host's language name ("JavaScript", "CSS")
    pub fn from_language_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "javascript" | "js" => Dialect::Script,
            "css" => Dialect::Stylesheet,
            _ => Dialect::Unrecognized,
        }
    }

    /// Detect dialect from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Dialect::Script,
            "css" => Dialect::Stylesheet,
            _ => Dialect::Unrecognized,
        }
    }

    /// Detect dialect from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Dialect::Unrecognized)
    }

    /// Language name a host would report for this dialect
    pub fn language_name(&self) -> &'static str {
        match self {
            Dialect::Script => "JavaScript",
            Dialect::Stylesheet => "CSS",
            Dialect::Unrecognized => "Plain Text",
        }
    }

    /// Whether documents in this dialect produce outline entries
    pub fn has_outline(&self) -> bool {
        !matches!(self, Dialect::Unrecognized)
    }
}
