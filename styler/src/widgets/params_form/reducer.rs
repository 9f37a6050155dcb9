use iced::Task;

use super::command::ParamsFormCommand;
use super::event::ParamsFormEffect;
use super::state::ParamsFormState;

/// Reduce a params form command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut ParamsFormState,
    command: ParamsFormCommand,
) -> Task<ParamsFormEffect> {
    match apply(state, command) {
        Some(effect) => Task::done(effect),
        None => Task::none(),
    }
}

/// Apply a command to state and return the effect it produces, if any.
pub(super) fn apply(
    state: &mut ParamsFormState,
    command: ParamsFormCommand,
) -> Option<ParamsFormEffect> {
    match command {
        ParamsFormCommand::TogglePanel => {
            let is_open = state.toggle();
            log::debug!("params panel toggled: open={is_open}");
            None
        },
        ParamsFormCommand::Dismiss => {
            if state.close() {
                log::debug!("params panel dismissed");
            }
            None
        },
        ParamsFormCommand::SelectOption { dimension, option } => {
            if !state.select_option(dimension, option) {
                log::warn!(
                    "ignored option {:?} for {dimension:?}: not in catalog",
                    option.value
                );
            }
            None
        },
        ParamsFormCommand::Apply => {
            let draft = state.draft();
            log::debug!("params applied: {draft:?}");
            Some(ParamsFormEffect::Applied(draft))
        },
        ParamsFormCommand::Reset => {
            let draft = state.reset();
            log::debug!("params reset to defaults");
            Some(ParamsFormEffect::Reset(draft))
        },
    }
}
