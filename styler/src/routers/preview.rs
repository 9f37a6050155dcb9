use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::preview::PreviewCommand;

/// Route a preview command through the widget reducer.
pub(crate) fn route_command(
    app: &mut App,
    command: PreviewCommand,
) -> Task<AppEvent> {
    app.widgets.preview.reduce(command);
    Task::none()
}
