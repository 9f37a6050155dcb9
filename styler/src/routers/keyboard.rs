use iced::Task;
use iced::keyboard::{self, Key, key::Named};

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::params_form::ParamsFormEvent;

/// Treat Enter as a form submission while the panel is open.
pub(crate) fn route(app: &mut App, event: keyboard::Event) -> Task<AppEvent> {
    match submit_event(app, &event) {
        Some(event) => routers::params_form::route_event(app, event),
        None => Task::none(),
    }
}

fn submit_event(
    app: &App,
    event: &keyboard::Event,
) -> Option<ParamsFormEvent> {
    match event {
        keyboard::Event::KeyPressed { key, .. }
            if is_submit_key(key) && app.widgets.params_form.is_open() =>
        {
            Some(ParamsFormEvent::Apply)
        },
        _ => None,
    }
}

fn is_submit_key(key: &Key) -> bool {
    matches!(key, Key::Named(Named::Enter))
}
