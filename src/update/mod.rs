//! Update functions for the Elm-style architecture
//!
//! All outline state transformations flow through these functions.

mod options;
mod outline;

use crate::commands::Cmd;
use crate::host::DocumentProvider;
use crate::messages::Msg;
use crate::model::OutlineModel;

pub use options::update_options;
pub use outline::{activate, deactivate, rebuild, update_lifecycle, update_outline};

/// Main update function - dispatches to sub-handlers
///
/// `documents` is read when the update rebuilds the outline.
pub fn update(
    model: &mut OutlineModel,
    documents: &dyn DocumentProvider,
    msg: Msg,
) -> Option<Cmd> {
    let _span = tracing::debug_span!("update", ?msg).entered();

    let result = match msg {
        Msg::Lifecycle(event) => outline::update_lifecycle(model, documents, event),
        Msg::Options(m) => options::update_options(model, documents, m),
        Msg::Outline(m) => outline::update_outline(model, m),
    };

    if let Some(cmd) = &result {
        tracing::trace!(?cmd, render = cmd.needs_render(), "update produced command");
    }
    result
}
