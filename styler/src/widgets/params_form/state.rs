use crate::shared::catalog::{CATALOG, Dimension, StyleOption};
use crate::shared::selection::StyleSelection;

/// Draft selection and open flag of the params form.
#[derive(Debug, Default)]
pub(crate) struct ParamsFormState {
    draft: StyleSelection,
    is_open: bool,
}

impl ParamsFormState {
    /// Return the unapplied selection.
    pub(crate) fn draft(&self) -> StyleSelection {
        self.draft
    }

    /// Return whether the panel is open.
    pub(crate) fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flip the open flag and return the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Close the panel. Return whether it was open.
    pub(crate) fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }

    /// Replace one draft field. Options outside the catalog are rejected.
    pub(crate) fn select_option(
        &mut self,
        dimension: Dimension,
        option: StyleOption,
    ) -> bool {
        if !CATALOG.contains(dimension, &option) {
            return false;
        }

        self.draft = self.draft.with_option(dimension, option);
        true
    }

    /// Restore the default draft and return it.
    pub(crate) fn reset(&mut self) -> StyleSelection {
        self.draft = StyleSelection::default();
        self.draft
    }
}
