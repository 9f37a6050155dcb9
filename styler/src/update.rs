use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event, then keep the dismiss controller in
/// step with the panel open flag.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    let task = route(app, event);
    routers::dismiss::sync(app);
    task
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Params form widget
        AppEvent::ParamsFormUi(event) => {
            routers::params_form::route_event(app, event)
        },
        AppEvent::ParamsFormEffect(effect) => {
            routers::params_form::route_effect(app, effect)
        },
        // Outside-press dismissal
        AppEvent::PointerPressed(press) => {
            routers::dismiss::route_pointer_press(app, press)
        },
        // Direct operations
        AppEvent::CursorMoved(position) => {
            app.state.cursor = Some(position);
            Task::none()
        },
        AppEvent::Keyboard(event) => routers::keyboard::route(app, event),
        AppEvent::Window(event) => routers::window::route(app, event),
    }
}
