use crate::shared::catalog::{Dimension, StyleOption};
use crate::shared::selection::StyleSelection;

/// UI events emitted by the params form presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ParamsFormEvent {
    /// The arrow button was pressed.
    TogglePanel,
    /// A press landed outside the open panel.
    Dismissed,
    /// A selector changed its value.
    OptionSelected {
        dimension: Dimension,
        option: StyleOption,
    },
    /// The form was submitted.
    Apply,
    /// The form was reset.
    Reset,
}

/// Effect events produced by the params form reducer, routed outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamsFormEffect {
    /// The draft should become the applied selection.
    Applied(StyleSelection),
    /// The draft was reset; the applied selection should follow.
    Reset(StyleSelection),
}
