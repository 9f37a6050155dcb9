use iced::Task;
use styler_ui_dismiss::PointerPress;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::params_form::ParamsFormEvent;

/// Align the dismiss controller with the panel open flag and layout.
pub(crate) fn sync(app: &mut App) {
    let is_open = app.widgets.params_form.is_open();
    let region = app.state.panel_region();
    app.dismiss.sync(is_open, region, ParamsFormEvent::Dismissed);
}

/// Close the panel when a pointer press lands outside of it.
pub(crate) fn route_pointer_press(
    app: &mut App,
    press: PointerPress,
) -> Task<AppEvent> {
    match dismissal_for(app, press) {
        Some(event) => routers::params_form::route_event(app, event),
        None => Task::none(),
    }
}

fn dismissal_for(app: &App, press: PointerPress) -> Option<ParamsFormEvent> {
    let Some(position) = press.position(app.state.cursor) else {
        log::debug!("pointer press without a known position ignored");
        return None;
    };

    app.dismiss.pointer_down(position)
}
