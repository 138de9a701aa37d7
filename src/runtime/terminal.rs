//! Terminal host
//!
//! Keeps a working set of documents read from disk and prints the outline
//! rows to a writer whenever the surface is repainted.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{CommandDef, CommandId};
use crate::host::{CommandRegistry, DocumentProvider, EditorFocus, EventBus, OutlineSurface};
use crate::messages::LifecycleEvent;
use crate::model::SourceDocument;
use crate::outline::OutlineEntry;

/// Host backed by files on disk and a text writer
pub struct TerminalHost<W: Write> {
    documents: Vec<SourceDocument>,
    current: Option<usize>,
    format: OutputFormat,
    out: W,
    attached: bool,
    subscriptions: BTreeSet<LifecycleEvent>,
    checked: BTreeMap<CommandId, bool>,
    cursor: Option<(usize, usize)>,
}

#[derive(Serialize)]
struct JsonOutline<'a> {
    document: String,
    language: &'a str,
    entries: &'a [OutlineEntry],
}

#[derive(Serialize)]
struct JsonCursor {
    line: usize,
    column: usize,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            documents: Vec::new(),
            current: None,
            format,
            out,
            attached: false,
            subscriptions: BTreeSet::new(),
            checked: BTreeMap::new(),
            cursor: None,
        }
    }

    /// Add a document to the working set and make it current
    pub fn open(&mut self, document: SourceDocument) {
        tracing::debug!("Opened {}", document.display_name());
        self.documents.push(document);
        self.current = Some(self.documents.len() - 1);
    }

    /// Replace the text of the document at `path`
    ///
    /// Returns `Some(true)` when the reloaded document is the current one,
    /// `None` when no open document has that path.
    pub fn reload(&mut self, path: &Path, text: &str) -> Option<bool> {
        let index = self.position(path)?;
        self.documents[index].replace_text(text);
        Some(self.current == Some(index))
    }

    /// Drop the document at `path` from the working set
    ///
    /// The last remaining document becomes current if the current one was removed.
    pub fn remove(&mut self, path: &Path) -> bool {
        let Some(index) = self.position(path) else {
            return false;
        };
        self.documents.remove(index);
        self.current = match self.current {
            Some(current) if current == index => self.documents.len().checked_sub(1),
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        true
    }

    pub fn documents(&self) -> &[SourceDocument] {
        &self.documents
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the outline currently listens to `event`
    pub fn is_subscribed(&self, event: LifecycleEvent) -> bool {
        self.subscriptions.contains(&event)
    }

    pub fn is_checked(&self, command: CommandId) -> bool {
        self.checked.get(&command).copied().unwrap_or(false)
    }

    /// Last position the outline moved the cursor to (0-based line, column)
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn position(&self, path: &Path) -> Option<usize> {
        self.documents
            .iter()
            .position(|doc| doc.file_path.as_deref() == Some(path))
    }

    fn write_text(&mut self, entries: &[OutlineEntry]) -> std::io::Result<()> {
        if let Some(doc) = self.current_document() {
            let header = format!("== {} ({}) ==", doc.display_name(), doc.language_name);
            writeln!(self.out, "{}", header)?;
        }
        for entry in entries {
            writeln!(
                self.out,
                "{}:{}  {}  {}",
                entry.target_line + 1,
                entry.target_column,
                entry.category.label(),
                entry.label
            )?;
        }
        self.out.flush()
    }

    fn write_json(&mut self, entries: &[OutlineEntry]) -> std::io::Result<()> {
        let (document, language) = match self.current_document() {
            Some(doc) => (doc.display_name(), doc.language_name.clone()),
            None => (String::new(), String::new()),
        };
        let payload = JsonOutline {
            document,
            language: &language,
            entries,
        };
        let line = serde_json::to_string(&payload)?;
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

impl<W: Write> DocumentProvider for TerminalHost<W> {
    fn current_document(&self) -> Option<&SourceDocument> {
        self.current.and_then(|index| self.documents.get(index))
    }
}

impl<W: Write> EditorFocus for TerminalHost<W> {
    fn set_cursor_pos(&mut self, line: usize, column: usize) {
        self.cursor = Some((line, column));
        let result = match self.format {
            OutputFormat::Text => writeln!(self.out, "cursor {}:{}", line + 1, column),
            OutputFormat::Json => serde_json::to_string(&JsonCursor { line, column })
                .map_err(std::io::Error::from)
                .and_then(|json| writeln!(self.out, "{{\"cursor\":{}}}", json)),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to report cursor: {}", e);
        }
    }

    fn focus_editor(&mut self) {
        tracing::debug!("Editor focused");
    }
}

impl<W: Write> EventBus for TerminalHost<W> {
    fn subscribe(&mut self, event: LifecycleEvent, namespace: &str) {
        tracing::trace!("subscribe {}.{}", event.name(), namespace);
        self.subscriptions.insert(event);
    }

    fn unsubscribe(&mut self, event: LifecycleEvent, namespace: &str) {
        tracing::trace!("unsubscribe {}.{}", event.name(), namespace);
        self.subscriptions.remove(&event);
    }
}

impl<W: Write> CommandRegistry for TerminalHost<W> {
    fn register_command(&mut self, def: &CommandDef) {
        tracing::debug!("Registered command {} ({})", def.name, def.label);
        self.checked.entry(def.id).or_insert(false);
    }

    fn set_checked(&mut self, command: CommandId, checked: bool) {
        self.checked.insert(command, checked);
    }

    fn add_menu_divider(&mut self) {}

    fn add_menu_item(&mut self, command: CommandId) {
        tracing::trace!("Menu item {}", command.def().label);
    }
}

impl<W: Write> OutlineSurface for TerminalHost<W> {
    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }

    fn render(&mut self, entries: &[OutlineEntry]) {
        if !self.attached {
            tracing::debug!("Render requested without a surface");
            return;
        }
        let result = match self.format {
            OutputFormat::Text => self.write_text(entries),
            OutputFormat::Json => self.write_json(entries),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to write outline: {}", e);
        }
    }
}
