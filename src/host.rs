//! Interfaces consumed from the host editor
//!
//! The outline never manages documents, cursors, panels or menus itself.
//! The runtime reaches the host only through these traits.

use crate::commands::{CommandDef, CommandId};
use crate::messages::LifecycleEvent;
use crate::model::SourceDocument;
use crate::outline::OutlineEntry;

/// Access to the active document
pub trait DocumentProvider {
    /// Document being edited, if any
    fn current_document(&self) -> Option<&SourceDocument>;
}

/// Cursor placement and focus
pub trait EditorFocus {
    fn set_cursor_pos(&mut self, line: usize, column: usize);
    fn focus_editor(&mut self);
}

/// Named lifecycle event subscriptions
pub trait EventBus {
    fn subscribe(&mut self, event: LifecycleEvent, namespace: &str);
    fn unsubscribe(&mut self, event: LifecycleEvent, namespace: &str);
}

/// Checkable commands and their menu placement
pub trait CommandRegistry {
    fn register_command(&mut self, def: &CommandDef);
    fn set_checked(&mut self, command: CommandId, checked: bool);
    fn add_menu_divider(&mut self);
    fn add_menu_item(&mut self, command: CommandId);
}

/// The panel that shows the outline rows
pub trait OutlineSurface {
    fn attach(&mut self);
    fn detach(&mut self);
    /// Replace every row with `entries`, in order
    fn render(&mut self, entries: &[OutlineEntry]);
}

/// Everything the runtime needs from the host
pub trait Host: DocumentProvider + EditorFocus + EventBus + CommandRegistry + OutlineSurface {}

impl<T> Host for T where
    T: DocumentProvider + EditorFocus + EventBus + CommandRegistry + OutlineSurface
{
}
