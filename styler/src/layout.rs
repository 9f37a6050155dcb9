use iced::{Point, Rectangle, Size};

use crate::widgets::params_form::view::arrow_button::ARROW_BUTTON_SIZE;
use crate::widgets::params_form::view::params_panel::PANEL_WIDTH;

/// Gap between the toggle button and the window or panel edge.
pub(crate) const TOGGLE_MARGIN: f32 = 16.0;

/// Screen area that counts as inside the options panel: the panel body
/// and the toggle button next to it.
pub(crate) type PanelRegion = [Rectangle; 2];

/// Return the toggle button bounds.
pub(crate) fn toggle_bounds(is_open: bool) -> Rectangle {
    let x = if is_open {
        PANEL_WIDTH + TOGGLE_MARGIN
    } else {
        TOGGLE_MARGIN
    };

    Rectangle::new(
        Point::new(x, TOGGLE_MARGIN),
        Size::new(ARROW_BUTTON_SIZE, ARROW_BUTTON_SIZE),
    )
}

/// Return the open panel bounds for the given window size.
pub(crate) fn panel_bounds(window_size: Size) -> Rectangle {
    Rectangle::new(
        Point::ORIGIN,
        Size::new(PANEL_WIDTH.min(window_size.width), window_size.height),
    )
}

/// Return the dismissal region of the open panel.
pub(crate) fn panel_region(window_size: Size) -> PanelRegion {
    [panel_bounds(window_size), toggle_bounds(true)]
}

#[cfg(test)]
mod tests {
    use iced::{Point, Size};
    use styler_ui_dismiss::Region;

    use super::{PANEL_WIDTH, TOGGLE_MARGIN, panel_region, toggle_bounds};

    const WINDOW: Size = Size::new(1280.0, 800.0);

    #[test]
    fn given_open_panel_when_pressing_toggle_then_press_is_inside_region() {
        let region = panel_region(WINDOW);
        let toggle = toggle_bounds(true);

        assert!(region.contains(toggle.center()));
    }

    #[test]
    fn given_open_panel_when_pressing_article_then_press_is_outside_region() {
        let region = panel_region(WINDOW);

        assert!(!region.contains(Point::new(900.0, 400.0)));
        assert!(!region.contains(Point::new(
            PANEL_WIDTH + TOGGLE_MARGIN / 2.0,
            400.0
        )));
    }

    #[test]
    fn given_open_panel_when_pressing_panel_bottom_then_press_is_inside_region()
    {
        let region = panel_region(WINDOW);

        assert!(region.contains(Point::new(10.0, WINDOW.height - 1.0)));
    }

    #[test]
    fn given_closed_panel_when_computing_toggle_then_sits_at_window_edge() {
        let toggle = toggle_bounds(false);

        assert_eq!(toggle.x, TOGGLE_MARGIN);
        assert_eq!(toggle.y, TOGGLE_MARGIN);
    }
}
