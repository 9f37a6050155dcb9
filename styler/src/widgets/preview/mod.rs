pub(crate) mod command;
mod errors;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::PreviewCommand;
use model::{ARTICLE, PreviewViewModel};
use state::PreviewState;

/// Preview widget: renders the article with the applied selection.
pub(crate) struct PreviewWidget {
    state: PreviewState,
}

impl PreviewWidget {
    /// Create a preview showing the default selection.
    pub(crate) fn new() -> Self {
        Self {
            state: PreviewState::default(),
        }
    }

    /// Reduce a command into state updates.
    pub(crate) fn reduce(&mut self, command: PreviewCommand) {
        reducer::reduce(&mut self.state, command);
    }

    /// Return a read-only view model for the article.
    pub(crate) fn vm(&self) -> PreviewViewModel<'_> {
        PreviewViewModel {
            resolved: self.state.resolved(),
            article: &ARTICLE,
        }
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &PreviewState {
        &self.state
    }
}
