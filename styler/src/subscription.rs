use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    // Only live while the options panel is open.
    let dismiss_subs = app.dismiss.subscription().map(AppEvent::PointerPressed);

    Subscription::batch([win_subs, key_subs, dismiss_subs])
}
