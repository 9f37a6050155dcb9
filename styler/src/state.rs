use iced::{Point, Size};

use crate::layout::{PanelRegion, panel_region};

/// Window geometry and pointer state.
#[derive(Debug, Default)]
pub(crate) struct State {
    /// Unknown until the window reports its size.
    pub(crate) window_size: Option<Size>,
    /// Last cursor position inside the window.
    pub(crate) cursor: Option<Point>,
}

impl State {
    /// Return the dismissal region of the open panel, once laid out.
    pub(crate) fn panel_region(&self) -> Option<PanelRegion> {
        self.window_size.map(panel_region)
    }
}
