use crate::shared::catalog::Dimension;
use crate::shared::selection::StyleSelection;

/// Heading rendered at the top of the open panel.
pub(crate) const PANEL_TITLE: &str = "Set parameters";

/// Kind of control rendered for a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldControl {
    /// Dropdown with the full option list.
    PickList,
    /// Inline group of radio buttons.
    RadioGroup,
}

impl FieldControl {
    pub(crate) fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::FontSize => FieldControl::RadioGroup,
            _ => FieldControl::PickList,
        }
    }
}

/// Return whether a separator line precedes the field of `dimension`.
pub(crate) fn has_separator_before(dimension: Dimension) -> bool {
    dimension == Dimension::BackgroundColor
}

/// Read-only view model for the params form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParamsFormViewModel {
    pub(crate) draft: StyleSelection,
    pub(crate) is_open: bool,
}
