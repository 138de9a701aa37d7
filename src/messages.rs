//! Message types for the Elm-style architecture
//!
//! All outline state changes flow through these message types.

use crate::config::OptionId;

/// Host document events the outline can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifecycleEvent {
    /// The active document switched
    CurrentDocumentChanged,
    /// A document was written to disk
    DocumentSaved,
    /// A document left the working set
    WorkingSetEntryRemoved,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 3] = [
        LifecycleEvent::CurrentDocumentChanged,
        LifecycleEvent::DocumentSaved,
        LifecycleEvent::WorkingSetEntryRemoved,
    ];

    /// Event name on the host's event bus
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::CurrentDocumentChanged => "currentDocumentChanged",
            LifecycleEvent::DocumentSaved => "documentSaved",
            LifecycleEvent::WorkingSetEntryRemoved => "workingSetEntryRemoved",
        }
    }
}

/// Display option messages (menu toggles)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsMsg {
    /// Flip an option and persist it
    Toggle(OptionId),
}

/// Outline panel messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineMsg {
    /// A rendered row was clicked
    SelectEntry { index: usize },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Host lifecycle event delivered through a subscription
    Lifecycle(LifecycleEvent),
    Options(OptionsMsg),
    Outline(OutlineMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_unique() {
        let mut names: Vec<_> = LifecycleEvent::ALL.iter().map(|e| e.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), LifecycleEvent::ALL.len());
    }
}
