use crate::shared::selection::StyleSelection;

/// Internal commands dispatched to the preview reducer.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PreviewCommand {
    /// Replace the applied selection.
    ApplySelection(StyleSelection),
}
