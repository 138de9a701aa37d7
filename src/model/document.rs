//! Document model - the text buffer and its dialect

use ropey::Rope;
use std::path::{Path, PathBuf};

use crate::dialect::Dialect;

/// An open document as seen by the outline
///
/// The dialect is resolved once, when the document is created.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// The text buffer
    pub buffer: Rope,
    /// Language name reported by the host ("JavaScript", "CSS", ...)
    pub language_name: String,
    /// Dialect used to pick the scanner
    pub dialect: Dialect,
    /// Path to the file on disk (None for untitled buffers)
    pub file_path: Option<PathBuf>,
}

impl SourceDocument {
    /// Create an untitled document with the host's language name
    pub fn with_language(language_name: &str, text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            language_name: language_name.to_string(),
            dialect: Dialect::from_language_name(language_name),
            file_path: None,
        }
    }

    /// Load a document from disk, detecting the dialect from its extension
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let dialect = Dialect::from_path(path);
        Ok(Self {
            buffer: Rope::from_str(&text),
            language_name: dialect.language_name().to_string(),
            dialect,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Override the language name (and with it the dialect)
    pub fn set_language(&mut self, language_name: &str) {
        self.language_name = language_name.to_string();
        self.dialect = Dialect::from_language_name(language_name);
    }

    /// Replace the buffer contents, e.g. after the file changed on disk
    pub fn replace_text(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
    }

    /// Full text of the buffer
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Name used in headers and logs
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}
