use super::catalog::{CATALOG, Dimension, StyleOption};

/// One chosen option per style dimension.
///
/// Values are only built from catalog entries, so every field belongs to the
/// catalog slice of its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleSelection {
    pub(crate) font_family: StyleOption,
    pub(crate) font_size: StyleOption,
    pub(crate) font_color: StyleOption,
    pub(crate) background_color: StyleOption,
    pub(crate) content_width: StyleOption,
}

impl Default for StyleSelection {
    /// First catalog entry of every dimension.
    fn default() -> Self {
        Self {
            font_family: CATALOG.first(Dimension::FontFamily),
            font_size: CATALOG.first(Dimension::FontSize),
            font_color: CATALOG.first(Dimension::FontColor),
            background_color: CATALOG.first(Dimension::BackgroundColor),
            content_width: CATALOG.first(Dimension::ContentWidth),
        }
    }
}

impl StyleSelection {
    /// Return the option chosen for `dimension`.
    pub(crate) fn option(&self, dimension: Dimension) -> StyleOption {
        match dimension {
            Dimension::FontFamily => self.font_family,
            Dimension::FontSize => self.font_size,
            Dimension::FontColor => self.font_color,
            Dimension::BackgroundColor => self.background_color,
            Dimension::ContentWidth => self.content_width,
        }
    }

    /// Return a copy with exactly one field replaced.
    pub(crate) fn with_option(
        mut self,
        dimension: Dimension,
        option: StyleOption,
    ) -> Self {
        let field = match dimension {
            Dimension::FontFamily => &mut self.font_family,
            Dimension::FontSize => &mut self.font_size,
            Dimension::FontColor => &mut self.font_color,
            Dimension::BackgroundColor => &mut self.background_color,
            Dimension::ContentWidth => &mut self.content_width,
        };
        *field = option;
        self
    }
}
