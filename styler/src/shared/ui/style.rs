use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Shadow, Vector};

use super::theme::{IcedColorPalette, ThemeProps};

/// Visual weight of a panel action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionKind {
    Primary,
    Secondary,
}

/// Return the container style of the sliding options panel.
pub(crate) fn panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        shadow: Shadow {
            color: palette.shadow,
            offset: Vector::new(4.0, 0.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Return the style of the thin line between panel sections.
pub(crate) fn separator_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let color = theme.theme.iced_palette().border;
    move |_theme: &iced::Theme| container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

/// Return a scrollbar style closure with thin rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Return the style of the Apply/Reset buttons.
pub(crate) fn action_button_style(
    palette: &IcedColorPalette,
    kind: ActionKind,
    status: ButtonStatus,
) -> button::Style {
    let hovered =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let (background, border_color) = match (kind, hovered) {
        (ActionKind::Primary, true) => {
            (Some(palette.dim_accent), palette.dim_accent)
        },
        (ActionKind::Primary, false) => (Some(palette.accent), palette.accent),
        (ActionKind::Secondary, true) => {
            (Some(palette.overlay), palette.foreground)
        },
        (ActionKind::Secondary, false) => (None, palette.foreground),
    };

    button::Style {
        background: background.map(Background::Color),
        text_color: palette.foreground,
        border: Border {
            width: 1.0,
            color: border_color,
            radius: iced::border::Radius::from(2.0),
        },
        ..Default::default()
    }
}

/// Return the style of the round panel toggle.
pub(crate) fn toggle_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => palette.dim_accent,
        _ => palette.accent,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.foreground,
        border: Border {
            width: 0.0,
            color: background,
            radius: iced::border::Radius::from(f32::MAX / 2.0),
        },
        shadow: Shadow {
            color: palette.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}
