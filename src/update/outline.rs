//! Outline panel update handlers
//!
//! Activation, deactivation and full rebuilds of the rendered entry list.

use crate::commands::Cmd;
use crate::host::DocumentProvider;
use crate::messages::{LifecycleEvent, OutlineMsg};
use crate::model::{OutlineModel, OutlineStatus};
use crate::outline::build_outline;

/// Rebuild every entry from the current document and repaint
pub fn rebuild(model: &mut OutlineModel, documents: &dyn DocumentProvider) -> Cmd {
    model.entries = build_outline(documents.current_document(), &model.options);
    tracing::debug!(entries = model.entries.len(), "Rebuilt outline");
    Cmd::Render
}

/// Inactive -> Active: attach the surface, subscribe to every lifecycle event, rebuild
pub fn activate(model: &mut OutlineModel, documents: &dyn DocumentProvider) -> Cmd {
    let mut cmds = release_subscriptions(model);

    model.status = OutlineStatus::Active;
    cmds.push(Cmd::AttachSurface);

    for event in LifecycleEvent::ALL {
        if model.subscriptions.insert(event) {
            cmds.push(Cmd::Subscribe(event));
        }
    }

    cmds.push(rebuild(model, documents));
    Cmd::batch(cmds)
}

/// Active -> Inactive: drop every subscription and the surface with its rows
pub fn deactivate(model: &mut OutlineModel) -> Cmd {
    let mut cmds = release_subscriptions(model);

    model.status = OutlineStatus::Inactive;
    model.entries.clear();
    cmds.push(Cmd::DetachSurface);

    Cmd::batch(cmds)
}

fn release_subscriptions(model: &mut OutlineModel) -> Vec<Cmd> {
    std::mem::take(&mut model.subscriptions)
        .into_iter()
        .map(Cmd::Unsubscribe)
        .collect()
}

/// Handle a lifecycle event from the host
///
/// Events are only honoured while active and subscribed.
pub fn update_lifecycle(
    model: &mut OutlineModel,
    documents: &dyn DocumentProvider,
    event: LifecycleEvent,
) -> Option<Cmd> {
    if !model.is_active() || !model.is_subscribed(event) {
        tracing::debug!("Ignoring {} while not subscribed", event.name());
        return None;
    }

    Some(rebuild(model, documents))
}

/// Handle outline panel messages
pub fn update_outline(model: &mut OutlineModel, msg: OutlineMsg) -> Option<Cmd> {
    match msg {
        OutlineMsg::SelectEntry { index } => {
            let Some(entry) = model.entry(index) else {
                tracing::debug!(index, "No outline entry at row");
                return None;
            };

            // Move cursor to the entry and focus the editor
            Some(Cmd::RevealPosition {
                line: entry.target_line,
                column: entry.target_column,
            })
        }
    }
}
