//! Outline display options
//!
//! Loaded once at startup from the preference store and persisted again
//! after every toggle.

use crate::preferences::{PreferenceStore, PreferenceType, PreferenceValue};

/// Preference namespace for everything the outline stores
pub const PREFERENCE_NAMESPACE: &str = "outline";

/// Identifies one of the user-toggleable options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionId {
    /// Outline panel shown and kept in sync
    Enabled,
    /// Anonymous functions listed as "function(...)"
    ShowUnnamedFunctions,
    /// Parameter lists appended to function labels
    ShowArguments,
}

impl OptionId {
    pub const ALL: [OptionId; 3] = [
        OptionId::Enabled,
        OptionId::ShowUnnamedFunctions,
        OptionId::ShowArguments,
    ];

    /// Stable preference key
    pub fn key(&self) -> &'static str {
        match self {
            OptionId::Enabled => "enabled",
            OptionId::ShowUnnamedFunctions => "unnamed",
            OptionId::ShowArguments => "args",
        }
    }
}

/// Display options for the outline, all on by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub enabled: bool,
    pub show_unnamed_functions: bool,
    pub show_arguments: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            show_unnamed_functions: true,
            show_arguments: true,
        }
    }
}

impl DisplayOptions {
    /// Load options from the store
    ///
    /// A missing or non-boolean preference is defined with its default,
    /// stored, and the store is persisted once at the end.
    pub fn load(store: &mut dyn PreferenceStore) -> Self {
        let mut options = Self::default();
        let mut repaired = false;

        for id in OptionId::ALL {
            let default = Self::default().get(id);
            let value = match store.get(id.key()).as_ref().and_then(PreferenceValue::as_bool) {
                Some(value) => value,
                None => {
                    tracing::debug!(
                        "Preference '{}' missing or not a boolean, resetting to {}",
                        id.key(),
                        default
                    );
                    store.define(
                        id.key(),
                        PreferenceType::Boolean,
                        PreferenceValue::Boolean(default),
                    );
                    store.set(id.key(), PreferenceValue::Boolean(default));
                    repaired = true;
                    default
                }
            };
            options.set(id, value);
        }

        if repaired {
            if let Err(e) = store.persist() {
                tracing::warn!("Failed to persist default preferences: {:#}", e);
            }
        }

        tracing::info!(
            enabled = options.enabled,
            unnamed = options.show_unnamed_functions,
            args = options.show_arguments,
            "Loaded outline options"
        );
        options
    }

    pub fn get(&self, id: OptionId) -> bool {
        match id {
            OptionId::Enabled => self.enabled,
            OptionId::ShowUnnamedFunctions => self.show_unnamed_functions,
            OptionId::ShowArguments => self.show_arguments,
        }
    }

    pub fn set(&mut self, id: OptionId, value: bool) {
        match id {
            OptionId::Enabled => self.enabled = value,
            OptionId::ShowUnnamedFunctions => self.show_unnamed_functions = value,
            OptionId::ShowArguments => self.show_arguments = value,
        }
    }

    /// Flip an option, returning its new value
    pub fn toggle(&mut self, id: OptionId) -> bool {
        let value = !self.get(id);
        self.set(id, value);
        value
    }
}
