use iced::widget::{
    Column, Row, Space, button, column, container, pick_list, radio, row,
    scrollable, text,
};
use iced::{Element, Length, Theme, alignment};

use crate::shared::catalog::{CATALOG, Dimension};
use crate::shared::selection::StyleSelection;
use crate::shared::ui::fonts::UiFonts;
use crate::shared::ui::style::{
    ActionKind, action_button_style, panel_style, separator_style,
    thin_scroll_style,
};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::params_form::event::ParamsFormEvent;
use crate::widgets::params_form::model::{
    FieldControl, PANEL_TITLE, ParamsFormViewModel, has_separator_before,
};

/// Width of the open panel.
pub(crate) const PANEL_WIDTH: f32 = 480.0;

const PANEL_PADDING: f32 = 32.0;
const FORM_SPACING: f32 = 28.0;
const FIELD_SPACING: f32 = 8.0;
const FIELD_TITLE_SIZE: f32 = 12.0;
const CONTROL_PADDING: [f32; 2] = [8.0, 12.0];
const RADIO_SPACING: f32 = 24.0;
const SEPARATOR_HEIGHT: f32 = 1.0;
const ACTION_HEIGHT: f32 = 44.0;
const ACTION_WIDTH: f32 = 128.0;
const ACTION_SPACING: f32 = 12.0;

/// Props for the options panel.
pub(crate) struct ParamsPanelProps<'a> {
    pub(crate) vm: ParamsFormViewModel,
    pub(crate) fonts: &'a UiFonts,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the open panel: title, one control per dimension and actions.
pub(crate) fn view(
    props: ParamsPanelProps<'_>,
) -> Element<'_, ParamsFormEvent, Theme, iced::Renderer> {
    let title = text(PANEL_TITLE.to_uppercase())
        .font(props.fonts.title)
        .size(props.fonts.title_size);

    let mut form = Column::new().spacing(FORM_SPACING).push(title);
    for dimension in Dimension::ALL {
        if has_separator_before(dimension) {
            form = form.push(separator(props.theme));
        }
        form = form.push(field(dimension, props.vm.draft, props.fonts));
    }

    let palette = props.theme.theme.iced_palette().clone();
    let scroll = scrollable::Scrollable::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        ))
        .style(thin_scroll_style(palette));

    let content = column![scroll, actions(props.theme, props.fonts)]
        .spacing(FORM_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .padding(PANEL_PADDING)
        .style(panel_style(props.theme))
        .into()
}

fn field<'a>(
    dimension: Dimension,
    draft: StyleSelection,
    fonts: &UiFonts,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let title = text(dimension.title().to_uppercase())
        .font(fonts.title)
        .size(FIELD_TITLE_SIZE);

    let on_select =
        move |option| ParamsFormEvent::OptionSelected { dimension, option };

    let control: Element<'a, ParamsFormEvent, Theme, iced::Renderer> =
        match FieldControl::for_dimension(dimension) {
            FieldControl::PickList => pick_list(
                CATALOG.options(dimension),
                Some(draft.option(dimension)),
                on_select,
            )
            .width(Length::Fill)
            .padding(CONTROL_PADDING)
            .font(fonts.font_type)
            .text_size(fonts.size)
            .into(),
            FieldControl::RadioGroup => {
                let selected = Some(draft.option(dimension));
                CATALOG
                    .options(dimension)
                    .iter()
                    .fold(Row::new().spacing(RADIO_SPACING), |group, &option| {
                        group.push(
                            radio(option.label, option, selected, on_select)
                                .font(fonts.font_type)
                                .text_size(fonts.size),
                        )
                    })
                    .into()
            },
        };

    column![title, control].spacing(FIELD_SPACING).into()
}

fn separator<'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(separator_style(theme))
        .into()
}

fn actions<'a>(
    theme: ThemeProps<'a>,
    fonts: &UiFonts,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let reset = action_button(
        "Reset",
        ActionKind::Secondary,
        ParamsFormEvent::Reset,
        theme,
        fonts,
    );
    let apply = action_button(
        "Apply",
        ActionKind::Primary,
        ParamsFormEvent::Apply,
        theme,
        fonts,
    );

    row![Space::new().width(Length::Fill), reset, apply]
        .spacing(ACTION_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    kind: ActionKind,
    event: ParamsFormEvent,
    theme: ThemeProps<'a>,
    fonts: &UiFonts,
) -> Element<'a, ParamsFormEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette().clone();
    let content = container(text(label.to_uppercase()).font(fonts.title))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .width(Length::Fixed(ACTION_WIDTH))
        .height(Length::Fixed(ACTION_HEIGHT))
        .style(move |_, status| action_button_style(&palette, kind, status))
        .on_press(event)
        .into()
}
