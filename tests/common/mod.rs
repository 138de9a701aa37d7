//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use code_outline::commands::{CommandDef, CommandId};
use code_outline::config::{DisplayOptions, OptionId, PREFERENCE_NAMESPACE};
use code_outline::host::{CommandRegistry, DocumentProvider, EditorFocus, EventBus, OutlineSurface};
use code_outline::messages::LifecycleEvent;
use code_outline::model::SourceDocument;
use code_outline::outline::OutlineEntry;
use code_outline::preferences::{PreferenceStore, PreferenceValue, YamlPreferenceStore};
use code_outline::runtime::OutlineRuntime;

/// Every host call, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    RegisterCommand(&'static str),
    SetChecked(CommandId, bool),
    MenuDivider,
    MenuItem(CommandId),
    Subscribe(LifecycleEvent, String),
    Unsubscribe(LifecycleEvent, String),
    Attach,
    Detach,
    Render(Vec<String>),
    SetCursor(usize, usize),
    Focus,
}

/// Host double that records every call it receives
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub document: Option<SourceDocument>,
    pub calls: Vec<HostCall>,
    pub subscriptions: BTreeSet<LifecycleEvent>,
    pub checked: BTreeMap<CommandId, bool>,
    pub attached: bool,
    /// Labels currently painted on the surface
    pub rows: Vec<String>,
}

impl RecordingHost {
    pub fn with_document(language: &str, text: &str) -> Self {
        Self {
            document: Some(SourceDocument::with_language(language, text)),
            ..Self::default()
        }
    }

    pub fn set_document(&mut self, language: &str, text: &str) {
        self.document = Some(SourceDocument::with_language(language, text));
    }

    pub fn renders(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Render(_)))
            .count()
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl DocumentProvider for RecordingHost {
    fn current_document(&self) -> Option<&SourceDocument> {
        self.document.as_ref()
    }
}

impl EditorFocus for RecordingHost {
    fn set_cursor_pos(&mut self, line: usize, column: usize) {
        self.calls.push(HostCall::SetCursor(line, column));
    }

    fn focus_editor(&mut self) {
        self.calls.push(HostCall::Focus);
    }
}

impl EventBus for RecordingHost {
    fn subscribe(&mut self, event: LifecycleEvent, namespace: &str) {
        self.subscriptions.insert(event);
        self.calls
            .push(HostCall::Subscribe(event, namespace.to_string()));
    }

    fn unsubscribe(&mut self, event: LifecycleEvent, namespace: &str) {
        self.subscriptions.remove(&event);
        self.calls
            .push(HostCall::Unsubscribe(event, namespace.to_string()));
    }
}

impl CommandRegistry for RecordingHost {
    fn register_command(&mut self, def: &CommandDef) {
        self.calls.push(HostCall::RegisterCommand(def.name));
    }

    fn set_checked(&mut self, command: CommandId, checked: bool) {
        self.checked.insert(command, checked);
        self.calls.push(HostCall::SetChecked(command, checked));
    }

    fn add_menu_divider(&mut self) {
        self.calls.push(HostCall::MenuDivider);
    }

    fn add_menu_item(&mut self, command: CommandId) {
        self.calls.push(HostCall::MenuItem(command));
    }
}

impl OutlineSurface for RecordingHost {
    fn attach(&mut self) {
        self.attached = true;
        self.calls.push(HostCall::Attach);
    }

    fn detach(&mut self) {
        self.attached = false;
        self.rows.clear();
        self.calls.push(HostCall::Detach);
    }

    fn render(&mut self, entries: &[OutlineEntry]) {
        self.rows = entries.iter().map(|e| e.label.clone()).collect();
        self.calls.push(HostCall::Render(self.rows.clone()));
    }
}

/// In-memory store pre-filled with `options`
pub fn store_with(options: DisplayOptions) -> YamlPreferenceStore {
    let mut store = YamlPreferenceStore::in_memory(PREFERENCE_NAMESPACE);
    for id in OptionId::ALL {
        store.set(id.key(), PreferenceValue::Boolean(options.get(id)));
    }
    store
}

/// Runtime over a recording host showing `text` as JavaScript, with default options
pub fn script_runtime(text: &str) -> OutlineRuntime<RecordingHost, YamlPreferenceStore> {
    OutlineRuntime::start(
        RecordingHost::with_document("JavaScript", text),
        store_with(DisplayOptions::default()),
    )
}

/// Stored boolean for an option
pub fn stored(store: &YamlPreferenceStore, option: OptionId) -> Option<bool> {
    store.get(option.key()).and_then(|v| v.as_bool())
}
