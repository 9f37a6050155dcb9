use iced::{Task, window};

use crate::app::{App, AppEvent};

/// Track window geometry used for the panel layout.
pub(crate) fn route(app: &mut App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            app.state.window_size = Some(size);
        },
        _ => {},
    }
    Task::none()
}
