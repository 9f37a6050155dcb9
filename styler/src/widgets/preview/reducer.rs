use super::command::PreviewCommand;
use super::state::PreviewState;

/// Reduce a preview command into state updates.
pub(crate) fn reduce(state: &mut PreviewState, command: PreviewCommand) {
    match command {
        PreviewCommand::ApplySelection(selection) => {
            if state.applied() == selection {
                return;
            }
            state.apply(selection);
            log::debug!(
                "preview applied: {:?}",
                state.vars().entries()
            );
        },
    }
}
