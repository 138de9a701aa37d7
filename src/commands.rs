//! Command types for the Elm-style architecture
//!
//! `Cmd` values describe side effects against the host that the runtime
//! performs after an update. The toggle command registry describes the
//! user-invocable actions the outline registers with the host.

use crate::config::OptionId;
use crate::messages::LifecycleEvent;

// ============================================================================
// Toggle Command Registry
// ============================================================================

/// Identifies a user-invocable toggle action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandId {
    ToggleOutline,
    ToggleUnnamedFunctions,
    ToggleArguments,
}

impl CommandId {
    /// Option flipped by this command
    pub fn option(&self) -> OptionId {
        match self {
            CommandId::ToggleOutline => OptionId::Enabled,
            CommandId::ToggleUnnamedFunctions => OptionId::ShowUnnamedFunctions,
            CommandId::ToggleArguments => OptionId::ShowArguments,
        }
    }

    /// Command flipping the given option
    pub fn for_option(option: OptionId) -> Self {
        match option {
            OptionId::Enabled => CommandId::ToggleOutline,
            OptionId::ShowUnnamedFunctions => CommandId::ToggleUnnamedFunctions,
            OptionId::ShowArguments => CommandId::ToggleArguments,
        }
    }

    pub fn def(&self) -> &'static CommandDef {
        match self {
            CommandId::ToggleOutline => &COMMANDS[0],
            CommandId::ToggleUnnamedFunctions => &COMMANDS[1],
            CommandId::ToggleArguments => &COMMANDS[2],
        }
    }
}

/// A checkable command definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Host command identifier
    pub name: &'static str,
    /// Menu label
    pub label: &'static str,
}

/// Static registry of all outline commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::ToggleOutline,
        name: "outline.show",
        label: "Outline",
    },
    CommandDef {
        id: CommandId::ToggleUnnamedFunctions,
        name: "outline.unnamed",
        label: "Show Unnamed Functions",
    },
    CommandDef {
        id: CommandId::ToggleArguments,
        name: "outline.args",
        label: "Show Arguments",
    },
];

/// View menu items, added after a divider in this order
pub static VIEW_MENU_ITEMS: &[CommandId] = &[
    CommandId::ToggleOutline,
    CommandId::ToggleArguments,
    CommandId::ToggleUnnamedFunctions,
];

// ============================================================================
// Side Effects
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Create the outline surface
    AttachSurface,
    /// Remove the outline surface
    DetachSurface,
    /// Start listening to a host event
    Subscribe(LifecycleEvent),
    /// Stop listening to a host event
    Unsubscribe(LifecycleEvent),
    /// Clear the surface and paint the model's current entries
    Render,
    /// Move the editor cursor and give the editor focus back
    RevealPosition { line: usize, column: usize },
    /// Update a command's checked state in the host menu
    SetChecked { command: CommandId, checked: bool },
    /// Store an option and persist the store
    SavePreference { option: OptionId, value: bool },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Whether the outline surface must be repainted
    pub fn needs_render(&self) -> bool {
        match self {
            Cmd::Render => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_render()),
            _ => false,
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_option_mapping_round_trips() {
        for def in COMMANDS {
            assert_eq!(CommandId::for_option(def.id.option()), def.id);
            assert_eq!(def.id.def().name, def.name);
        }
    }

    #[test]
    fn test_command_names_are_namespaced() {
        assert!(COMMANDS.iter().all(|def| def.name.starts_with("outline.")));
    }

    #[test]
    fn test_menu_lists_every_command_once() {
        assert_eq!(VIEW_MENU_ITEMS.len(), COMMANDS.len());
        for def in COMMANDS {
            assert_eq!(
                VIEW_MENU_ITEMS.iter().filter(|id| **id == def.id).count(),
                1
            );
        }
    }

    #[test]
    fn test_flatten_preserves_order() {
        let cmd = Cmd::batch(vec![
            Cmd::AttachSurface,
            Cmd::None,
            Cmd::batch(vec![
                Cmd::Subscribe(LifecycleEvent::DocumentSaved),
                Cmd::Render,
            ]),
        ]);
        assert!(cmd.needs_render());
        assert_eq!(
            cmd.flatten(),
            vec![
                Cmd::AttachSurface,
                Cmd::Subscribe(LifecycleEvent::DocumentSaved),
                Cmd::Render,
            ]
        );
    }
}
