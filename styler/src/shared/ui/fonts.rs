use iced::Font;
use iced::font::{Family, Weight};

/// UI font configuration for the panel chrome.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) title: Font,
    pub(crate) size: f32,
    pub(crate) title_size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            title: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            size: 14.0,
            title_size: 28.0,
        }
    }
}

/// Combined font configuration.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
}

/// Resolve a font family name to an iced font.
///
/// Families are looked up in the system font database at render time and
/// fall back to the default font when missing.
pub(crate) fn family_font(name: &'static str) -> Font {
    Font {
        family: Family::Name(name),
        ..Font::default()
    }
}
