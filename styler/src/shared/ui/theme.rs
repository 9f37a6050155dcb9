use iced::theme::Palette;
use iced::{Color, Theme};

/// Colors used by the panel chrome (not by the article preview).
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
    pub(crate) border: Color,
    pub(crate) accent: Color,
    pub(crate) dim_accent: Color,
    pub(crate) shadow: Color,
}

impl Default for IcedColorPalette {
    fn default() -> Self {
        Self {
            foreground: Color::from_rgb8(0x00, 0x00, 0x00),
            background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            overlay: Color::from_rgb8(0xF4, 0xF4, 0xF4),
            border: Color::from_rgb8(0xC4, 0xC4, 0xC4),
            accent: Color::from_rgb8(0xFF, 0xC8, 0x02),
            dim_accent: Color::from_rgb8(0xE5, 0xB4, 0x02),
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0.2),
        }
    }
}

/// Application theme for the panel chrome.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("styler-light"),
            iced_palette: IcedColorPalette::default(),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: Color::from_rgb8(0x80, 0xD9, 0x94),
            danger: Color::from_rgb8(0xFD, 0x24, 0xAF),
            warning: palette.accent,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed from the app root down to widget views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the current theme and its iced conversion.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
    iced: Theme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        let current = AppTheme::default();
        let iced = Theme::from(&current);

        Self { current, iced }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        self.iced.clone()
    }
}
