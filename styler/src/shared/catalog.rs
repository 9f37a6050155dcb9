use std::fmt;

/// One legal choice for a style dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StyleOption {
    pub(crate) value: &'static str,
    pub(crate) label: &'static str,
}

impl StyleOption {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    const fn same(value: &'static str) -> Self {
        Self::new(value, value)
    }
}

impl fmt::Display for StyleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// The five independently selectable style dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Dimension {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl Dimension {
    pub(crate) const ALL: [Dimension; 5] = [
        Dimension::FontFamily,
        Dimension::FontSize,
        Dimension::FontColor,
        Dimension::BackgroundColor,
        Dimension::ContentWidth,
    ];

    /// Return the field title shown next to the control.
    pub(crate) fn title(self) -> &'static str {
        match self {
            Dimension::FontFamily => "Font",
            Dimension::FontSize => "Font size",
            Dimension::FontColor => "Font color",
            Dimension::BackgroundColor => "Background color",
            Dimension::ContentWidth => "Content width",
        }
    }
}

const FONT_FAMILIES: &[StyleOption] = &[
    StyleOption::same("Open Sans"),
    StyleOption::same("Ubuntu"),
    StyleOption::same("Cormorant Garamond"),
    StyleOption::same("Days One"),
    StyleOption::same("Merriweather"),
];

const FONT_SIZES: &[StyleOption] = &[
    StyleOption::same("18px"),
    StyleOption::same("25px"),
    StyleOption::same("38px"),
];

const FONT_COLORS: &[StyleOption] = &[
    StyleOption::new("#000000", "Black"),
    StyleOption::new("#FFFFFF", "White"),
    StyleOption::new("#C4C4C4", "Gray"),
    StyleOption::new("#FEAFE8", "Pink"),
    StyleOption::new("#FD24AF", "Hot pink"),
    StyleOption::new("#FFC802", "Yellow"),
    StyleOption::new("#80D994", "Green"),
    StyleOption::new("#6FC1FD", "Light blue"),
    StyleOption::new("#5F39AF", "Purple"),
];

const BACKGROUND_COLORS: &[StyleOption] = &[
    StyleOption::new("#FFFFFF", "White"),
    StyleOption::new("#000000", "Black"),
    StyleOption::new("#C4C4C4", "Gray"),
    StyleOption::new("#FEAFE8", "Pink"),
    StyleOption::new("#FD24AF", "Hot pink"),
    StyleOption::new("#FFC802", "Yellow"),
    StyleOption::new("#80D994", "Green"),
    StyleOption::new("#6FC1FD", "Light blue"),
    StyleOption::new("#5F39AF", "Purple"),
];

const CONTENT_WIDTHS: &[StyleOption] = &[
    StyleOption::new("1394px", "Wide"),
    StyleOption::new("948px", "Narrow"),
];

/// Compiled-in table of legal options per dimension.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OptionCatalog {
    font_families: &'static [StyleOption],
    font_sizes: &'static [StyleOption],
    font_colors: &'static [StyleOption],
    background_colors: &'static [StyleOption],
    content_widths: &'static [StyleOption],
}

/// The process-wide option catalog.
pub(crate) const CATALOG: OptionCatalog = OptionCatalog {
    font_families: FONT_FAMILIES,
    font_sizes: FONT_SIZES,
    font_colors: FONT_COLORS,
    background_colors: BACKGROUND_COLORS,
    content_widths: CONTENT_WIDTHS,
};

impl OptionCatalog {
    /// Return the ordered options for a dimension.
    pub(crate) fn options(
        &self,
        dimension: Dimension,
    ) -> &'static [StyleOption] {
        match dimension {
            Dimension::FontFamily => self.font_families,
            Dimension::FontSize => self.font_sizes,
            Dimension::FontColor => self.font_colors,
            Dimension::BackgroundColor => self.background_colors,
            Dimension::ContentWidth => self.content_widths,
        }
    }

    /// Return the first option of a dimension, used as its default.
    pub(crate) fn first(&self, dimension: Dimension) -> StyleOption {
        self.options(dimension)[0]
    }

    /// Return whether `option` is a legal choice for `dimension`.
    pub(crate) fn contains(
        &self,
        dimension: Dimension,
        option: &StyleOption,
    ) -> bool {
        self.options(dimension).contains(option)
    }
}
