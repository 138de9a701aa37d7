//! Runtime - performs update commands against a host
//!
//! - `OutlineRuntime` owns the model, the host and the preference store
//! - `terminal` is a host that prints outline rows to a writer
//! - `app` is the command-line application loop

pub mod app;
pub mod terminal;

use crate::commands::{Cmd, COMMANDS, VIEW_MENU_ITEMS};
use crate::config::{DisplayOptions, OptionId};
use crate::host::Host;
use crate::messages::{LifecycleEvent, Msg, OptionsMsg, OutlineMsg};
use crate::model::{OutlineModel, EVENT_NAMESPACE};
use crate::preferences::{PreferenceStore, PreferenceValue};
use crate::update::{activate, update};

/// Drives the outline controller for one host
pub struct OutlineRuntime<H: Host, S: PreferenceStore> {
    model: OutlineModel,
    host: H,
    store: S,
}

impl<H: Host, S: PreferenceStore> OutlineRuntime<H, S> {
    /// Load options, register the toggle commands and activate if enabled
    pub fn start(mut host: H, mut store: S) -> Self {
        let options = DisplayOptions::load(&mut store);

        for def in COMMANDS {
            host.register_command(def);
        }
        host.add_menu_divider();
        for command in VIEW_MENU_ITEMS {
            host.add_menu_item(*command);
        }
        for def in COMMANDS {
            host.set_checked(def.id, options.get(def.id.option()));
        }

        let mut runtime = Self {
            model: OutlineModel::new(options),
            host,
            store,
        };

        if options.enabled {
            let cmd = activate(&mut runtime.model, &runtime.host);
            runtime.perform(cmd);
        } else {
            tracing::info!("Outline disabled, not attaching");
        }

        runtime
    }

    /// Run a message through `update` and perform the resulting commands
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, &self.host, msg) {
            self.perform(cmd);
        }
    }

    /// Deliver a host lifecycle event
    pub fn notify(&mut self, event: LifecycleEvent) {
        self.dispatch(Msg::Lifecycle(event));
    }

    /// Invoke the toggle command for an option
    pub fn toggle(&mut self, option: OptionId) {
        self.dispatch(Msg::Options(OptionsMsg::Toggle(option)));
    }

    /// A rendered row was clicked
    pub fn select(&mut self, index: usize) {
        self.dispatch(Msg::Outline(OutlineMsg::SelectEntry { index }));
    }

    pub fn model(&self) -> &OutlineModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear down, handing back the host and the store
    pub fn into_parts(self) -> (H, S) {
        (self.host, self.store)
    }

    fn perform(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::AttachSurface => self.host.attach(),
            Cmd::DetachSurface => self.host.detach(),
            Cmd::Subscribe(event) => {
                tracing::debug!("Subscribing to {}.{}", event.name(), EVENT_NAMESPACE);
                self.host.subscribe(event, EVENT_NAMESPACE);
            }
            Cmd::Unsubscribe(event) => {
                tracing::debug!("Unsubscribing from {}.{}", event.name(), EVENT_NAMESPACE);
                self.host.unsubscribe(event, EVENT_NAMESPACE);
            }
            Cmd::Render => self.host.render(&self.model.entries),
            Cmd::RevealPosition { line, column } => {
                self.host.set_cursor_pos(line, column);
                self.host.focus_editor();
            }
            Cmd::SetChecked { command, checked } => self.host.set_checked(command, checked),
            Cmd::SavePreference { option, value } => {
                self.store.set(option.key(), PreferenceValue::Boolean(value));
                if let Err(e) = self.store.persist() {
                    tracing::warn!("Failed to persist option '{}': {:#}", option.key(), e);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.perform(cmd);
                }
            }
        }
    }
}
