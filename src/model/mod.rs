//! Model types for the outline controller
//!
//! `OutlineModel` is the whole controller state: display options, the
//! active/inactive state, the host events currently subscribed, and the
//! entries last rendered.

pub mod document;

pub use document::SourceDocument;

use std::collections::BTreeSet;

use crate::config::DisplayOptions;
use crate::messages::LifecycleEvent;
use crate::outline::OutlineEntry;

/// Namespace used for every host event subscription
pub const EVENT_NAMESPACE: &str = "outline";

/// Whether the outline surface is shown and kept in sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineStatus {
    Active,
    #[default]
    Inactive,
}

/// Outline controller state
#[derive(Debug, Clone, Default)]
pub struct OutlineModel {
    pub options: DisplayOptions,
    pub status: OutlineStatus,
    /// Host events currently subscribed under [`EVENT_NAMESPACE`]
    pub subscriptions: BTreeSet<LifecycleEvent>,
    /// Entries currently painted on the surface
    pub entries: Vec<OutlineEntry>,
}

impl OutlineModel {
    /// Model for freshly loaded options; activation happens through `update::activate`
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == OutlineStatus::Active
    }

    pub fn is_subscribed(&self, event: LifecycleEvent) -> bool {
        self.subscriptions.contains(&event)
    }

    /// Entry painted at a row index
    pub fn entry(&self, index: usize) -> Option<&OutlineEntry> {
        self.entries.get(index)
    }
}
