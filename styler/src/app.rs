#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Point, Subscription, Task, Theme};
use styler_ui_dismiss::{DismissController, PointerPress};

use crate::layout::PanelRegion;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::params_form::{
    ParamsFormEffect, ParamsFormEvent, ParamsFormWidget,
};
use crate::widgets::preview::PreviewWidget;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Params form widget
    ParamsFormUi(ParamsFormEvent),
    ParamsFormEffect(ParamsFormEffect),
    // Outside-press dismissal
    PointerPressed(PointerPress),
    // Direct operations
    CursorMoved(Point),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) params_form: ParamsFormWidget,
    pub(crate) preview: PreviewWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    pub(crate) dismiss: DismissController<ParamsFormEvent, PanelRegion>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = App {
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            state: State::default(),
            dismiss: DismissController::new(),
            widgets: Widgets {
                params_form: ParamsFormWidget::new(),
                preview: PreviewWidget::new(),
            },
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Styler")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
