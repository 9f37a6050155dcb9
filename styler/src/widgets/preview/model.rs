use iced::{Color, Font};

use super::errors::PresentationError;
use crate::shared::selection::StyleSelection;
use crate::shared::ui::fonts::family_font;

/// The five named variables the article is rendered with.
///
/// Each variable is the raw `value` of the matching selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PresentationVars {
    pub(crate) font_family: &'static str,
    pub(crate) font_size: &'static str,
    pub(crate) font_color: &'static str,
    pub(crate) container_width: &'static str,
    pub(crate) bg_color: &'static str,
}

impl PresentationVars {
    pub(crate) fn from_selection(selection: &StyleSelection) -> Self {
        Self {
            font_family: selection.font_family.value,
            font_size: selection.font_size.value,
            font_color: selection.font_color.value,
            container_width: selection.content_width.value,
            bg_color: selection.background_color.value,
        }
    }

    /// Return `(name, value)` pairs in a stable order.
    pub(crate) fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("font-family", self.font_family),
            ("font-size", self.font_size),
            ("font-color", self.font_color),
            ("container-width", self.container_width),
            ("bg-color", self.bg_color),
        ]
    }
}

/// Presentation variables converted to renderer values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedPresentation {
    pub(crate) font: Font,
    pub(crate) font_size: f32,
    pub(crate) font_color: Color,
    pub(crate) container_width: f32,
    pub(crate) bg_color: Color,
}

impl ResolvedPresentation {
    /// Plain renderer defaults, used only when the default selection
    /// itself fails to parse.
    const FALLBACK: Self = Self {
        font: Font::DEFAULT,
        font_size: 16.0,
        font_color: Color::BLACK,
        container_width: f32::INFINITY,
        bg_color: Color::WHITE,
    };
}

impl Default for ResolvedPresentation {
    /// Render values of the default selection.
    fn default() -> Self {
        let vars = PresentationVars::from_selection(&StyleSelection::default());
        Self::try_from(&vars).unwrap_or_else(|err| {
            log::warn!("default presentation unresolvable: {err}");
            Self::FALLBACK
        })
    }
}

impl TryFrom<&PresentationVars> for ResolvedPresentation {
    type Error = PresentationError;

    fn try_from(vars: &PresentationVars) -> Result<Self, Self::Error> {
        Ok(Self {
            font: family_font(vars.font_family),
            font_size: parse_px_length(vars.font_size)?,
            font_color: parse_hex_color(vars.font_color)?,
            container_width: parse_px_length(vars.container_width)?,
            bg_color: parse_hex_color(vars.bg_color)?,
        })
    }
}

/// Parse a `#RRGGBB` color.
pub(crate) fn parse_hex_color(value: &str) -> Result<Color, PresentationError> {
    let invalid = || PresentationError::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Parse a positive pixel length such as `18px`.
pub(crate) fn parse_px_length(value: &str) -> Result<f32, PresentationError> {
    let invalid = || PresentationError::InvalidLength {
        value: value.to_string(),
    };

    let number = value.strip_suffix("px").ok_or_else(invalid)?;
    let length: f32 = number.trim().parse().map_err(|_| invalid())?;
    if !length.is_finite() || length <= 0.0 {
        return Err(invalid());
    }

    Ok(length)
}

/// Static article copy rendered by the preview.
#[derive(Debug)]
pub(crate) struct ArticleCopy {
    pub(crate) title: &'static str,
    pub(crate) subtitle: &'static str,
    pub(crate) paragraphs: &'static [&'static str],
}

/// Read-only view model for the article preview.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PreviewViewModel<'a> {
    pub(crate) resolved: &'a ResolvedPresentation,
    pub(crate) article: &'static ArticleCopy,
}

pub(crate) const ARTICLE: ArticleCopy = ArticleCopy {
    title: "The Quiet Craft of Typesetting",
    subtitle: "How a page learns to speak before anyone reads it",
    paragraphs: &[
        "Long before the first word is read, a page has already made an \
         impression. The weight of the letters, the air between the lines and \
         the width of the column tell the reader whether to settle in or to \
         skim. Typesetters learned this by hand, one sort at a time, and the \
         lesson survived every change of tools.",
        "A comfortable measure keeps the eye from losing its place on the way \
         back to the start of the next line. Too narrow, and the text breaks \
         into nervous fragments; too wide, and every return becomes a search. \
         Most books settle somewhere between fifty and seventy-five \
         characters.",
        "Color matters as much as shape. Dark text on a light ground is the \
         familiar default, but a tinted page can soften glare, and a bold \
         background can turn a quotation into a poster. What matters is the \
         contrast between the two, not the particular hues.",
        "Size, finally, sets the pace. Larger type slows the reader down and \
         gives each sentence more room to land, while smaller type invites a \
         brisk, scanning rhythm. Choosing between them is less about taste \
         than about what the words are asking for.",
    ],
};
