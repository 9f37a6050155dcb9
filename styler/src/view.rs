use iced::widget::{Stack, container, mouse_area, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::layout::TOGGLE_MARGIN;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::params_form::ParamsFormEvent;
use crate::widgets::params_form::view::{arrow_button, params_panel};
use crate::widgets::preview::view::article;

/// Render the root application view: the article with the options panel
/// layered on top.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());

    let preview = article::view(article::ArticleProps {
        vm: app.widgets.preview.vm(),
    });

    let overlay =
        view_params_overlay(app, theme_props).map(AppEvent::ParamsFormUi);

    let layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![preview, overlay];

    let stack = Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(stack).on_move(AppEvent::CursorMoved).into()
}

fn view_params_overlay<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let vm = app.widgets.params_form.vm();

    let toggle = container(arrow_button::view(arrow_button::ArrowButtonProps {
        is_open: vm.is_open,
        theme: theme_props,
    }))
    .padding(TOGGLE_MARGIN);

    if !vm.is_open {
        return toggle.into();
    }

    let panel = params_panel::view(params_panel::ParamsPanelProps {
        vm,
        fonts: &app.fonts.ui,
        theme: theme_props,
    });

    row![panel, toggle].height(Length::Fill).into()
}
