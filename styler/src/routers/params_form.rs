use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::params_form::{
    ParamsFormCommand, ParamsFormEffect, ParamsFormEvent,
};
use crate::widgets::preview::PreviewCommand;

/// Route a params form UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ParamsFormEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Reduce a params form command and forward its effect to the app.
fn route_command(
    app: &mut App,
    command: ParamsFormCommand,
) -> Task<AppEvent> {
    app.widgets
        .params_form
        .reduce(command)
        .map(AppEvent::ParamsFormEffect)
}

/// Route a params form effect to the preview.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ParamsFormEffect,
) -> Task<AppEvent> {
    routers::preview::route_command(app, preview_command_for(effect))
}

fn preview_command_for(effect: ParamsFormEffect) -> PreviewCommand {
    match effect {
        ParamsFormEffect::Applied(selection)
        | ParamsFormEffect::Reset(selection) => {
            PreviewCommand::ApplySelection(selection)
        },
    }
}

fn map_event_to_command(event: ParamsFormEvent) -> ParamsFormCommand {
    use {ParamsFormCommand as C, ParamsFormEvent as E};

    match event {
        E::TogglePanel => C::TogglePanel,
        E::Dismissed => C::Dismiss,
        E::OptionSelected { dimension, option } => {
            C::SelectOption { dimension, option }
        },
        E::Apply => C::Apply,
        E::Reset => C::Reset,
    }
}
