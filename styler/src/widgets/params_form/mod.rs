pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::ParamsFormCommand;
pub(crate) use event::{ParamsFormEffect, ParamsFormEvent};
use iced::Task;
use model::ParamsFormViewModel;
use state::ParamsFormState;

/// Params form widget: the sliding options panel holding the draft
/// selection, with apply/reset hand-off to the preview.
pub(crate) struct ParamsFormWidget {
    state: ParamsFormState,
}

impl ParamsFormWidget {
    /// Create a closed panel with the default draft.
    pub(crate) fn new() -> Self {
        Self {
            state: ParamsFormState::default(),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ParamsFormCommand,
    ) -> Task<ParamsFormEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a read-only view model for the panel.
    pub(crate) fn vm(&self) -> ParamsFormViewModel {
        ParamsFormViewModel {
            draft: self.state.draft(),
            is_open: self.state.is_open(),
        }
    }

    /// Return whether the panel is open.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Apply a command synchronously and return its effect.
    #[cfg(test)]
    pub(crate) fn apply(
        &mut self,
        command: ParamsFormCommand,
    ) -> Option<ParamsFormEffect> {
        reducer::apply(&mut self.state, command)
    }
}
