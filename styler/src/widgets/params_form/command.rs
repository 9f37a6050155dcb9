use crate::shared::catalog::{Dimension, StyleOption};

/// Internal commands dispatched to the params form reducer.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ParamsFormCommand {
    /// Flip the panel open flag.
    TogglePanel,
    /// Close the panel after a press outside of it.
    Dismiss,
    /// Replace one draft field.
    SelectOption {
        dimension: Dimension,
        option: StyleOption,
    },
    /// Hand the draft over to the preview.
    Apply,
    /// Restore the default draft and preview.
    Reset,
}
