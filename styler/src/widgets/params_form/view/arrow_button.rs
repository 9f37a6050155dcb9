use iced::widget::{button, container, svg};
use iced::{Element, Length, Radians, Theme, alignment};

use crate::shared::ui::icons;
use crate::shared::ui::style::toggle_button_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::params_form::event::ParamsFormEvent;

/// Edge length of the round toggle button.
pub(crate) const ARROW_BUTTON_SIZE: f32 = 48.0;
const ARROW_ICON_SIZE: f32 = 20.0;

/// Props for the panel toggle button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrowButtonProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the arrow that opens and closes the panel.
pub(crate) fn view(
    props: ArrowButtonProps<'_>,
) -> Element<'_, ParamsFormEvent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();
    let rotation = if props.is_open {
        Radians(std::f32::consts::PI)
    } else {
        Radians(0.0)
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::ARROW))
        .width(Length::Fixed(ARROW_ICON_SIZE))
        .height(Length::Fixed(ARROW_ICON_SIZE))
        .rotation(rotation);

    let content = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .width(Length::Fixed(ARROW_BUTTON_SIZE))
        .height(Length::Fixed(ARROW_BUTTON_SIZE))
        .padding(0)
        .style(move |_, status| toggle_button_style(&palette, status))
        .on_press(ParamsFormEvent::TogglePanel)
        .into()
}
