//! Display option toggles

use crate::commands::{Cmd, CommandId};
use crate::config::OptionId;
use crate::host::DocumentProvider;
use crate::messages::OptionsMsg;
use crate::model::OutlineModel;

use super::outline::{activate, deactivate, rebuild};

/// Handle option messages
///
/// Every toggle updates the command's checked state and persists the option.
/// `enabled` drives the active/inactive transition; the other two options
/// only rebuild while the outline is active.
pub fn update_options(
    model: &mut OutlineModel,
    documents: &dyn DocumentProvider,
    msg: OptionsMsg,
) -> Option<Cmd> {
    match msg {
        OptionsMsg::Toggle(option) => {
            let value = model.options.toggle(option);
            tracing::info!("Option '{}' set to {}", option.key(), value);

            let mut cmds = vec![
                Cmd::SetChecked {
                    command: CommandId::for_option(option),
                    checked: value,
                },
                Cmd::SavePreference { option, value },
            ];

            match option {
                OptionId::Enabled if value => cmds.push(activate(model, documents)),
                OptionId::Enabled => cmds.push(deactivate(model)),
                OptionId::ShowUnnamedFunctions | OptionId::ShowArguments => {
                    if model.is_active() {
                        cmds.push(rebuild(model, documents));
                    }
                }
            }

            Some(Cmd::batch(cmds))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayOptions;
    use crate::model::SourceDocument;

    struct NoDocument;

    impl DocumentProvider for NoDocument {
        fn current_document(&self) -> Option<&SourceDocument> {
            None
        }
    }

    #[test]
    fn test_toggle_while_inactive_only_persists() {
        let mut model = OutlineModel::new(DisplayOptions::default());

        let cmds = update_options(
            &mut model,
            &NoDocument,
            OptionsMsg::Toggle(OptionId::ShowArguments),
        )
        .map(Cmd::flatten)
        .unwrap_or_default();

        assert!(!model.options.show_arguments);
        assert_eq!(
            cmds,
            vec![
                Cmd::SetChecked {
                    command: CommandId::ToggleArguments,
                    checked: false
                },
                Cmd::SavePreference {
                    option: OptionId::ShowArguments,
                    value: false
                },
            ]
        );
    }

    #[test]
    fn test_toggle_enabled_flips_status() {
        let mut model = OutlineModel::new(DisplayOptions {
            enabled: false,
            ..DisplayOptions::default()
        });

        let on = update_options(&mut model, &NoDocument, OptionsMsg::Toggle(OptionId::Enabled));
        assert!(model.is_active());
        assert!(on.is_some_and(|cmd| cmd.needs_render()));

        let off = update_options(&mut model, &NoDocument, OptionsMsg::Toggle(OptionId::Enabled));
        assert!(!model.is_active());
        assert!(off.is_some_and(|cmd| !cmd.needs_render()));
    }
}
