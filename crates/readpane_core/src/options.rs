//! Static style option catalogs for the article reader.
//!
//! Every value the params panel can offer lives here. The catalogs are fixed
//! at compile time and never mutated, so a selected option is always valid by
//! construction and the settings records can hold `&'static` references.

/// One enumerated style choice: a display label plus the style value it
/// stands for (a font stack, a pixel size, a hex color, a pixel width).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOption {
    pub label: &'static str,
    pub value: &'static str,
}

const fn option(label: &'static str, value: &'static str) -> StyleOption {
    StyleOption { label, value }
}

/// Font families offered by the panel. The first entry is the default.
pub static FONT_FAMILY_OPTIONS: &[StyleOption] = &[
    option("open-sans", "Open Sans, sans-serif"),
    option("ubuntu", "Ubuntu, sans-serif"),
    option("cormorant-garamond", "Cormorant Garamond, serif"),
    option("days-one", "Days One, sans-serif"),
    option("merriweather", "Merriweather, serif"),
];

/// Body text sizes, smallest first.
pub static FONT_SIZE_OPTIONS: &[StyleOption] = &[
    option("18px", "18px"),
    option("25px", "25px"),
    option("38px", "38px"),
];

/// Text colors. Black leads so it becomes the default.
pub static FONT_COLORS: &[StyleOption] = &[
    option("black", "#000000"),
    option("white", "#FFFFFF"),
    option("gray", "#C4C4C4"),
    option("mint", "#66CDAA"),
    option("violet", "#5F2E9E"),
    option("pink", "#F655A3"),
];

/// Page background colors. Same palette as [`FONT_COLORS`], white leads.
pub static BACKGROUND_COLORS: &[StyleOption] = &[
    option("white", "#FFFFFF"),
    option("black", "#000000"),
    option("gray", "#C4C4C4"),
    option("mint", "#66CDAA"),
    option("violet", "#5F2E9E"),
    option("pink", "#F655A3"),
];

/// Maximum width of the rendered article column.
pub static CONTENT_WIDTH_OPTIONS: &[StyleOption] = &[
    option("800px", "800px"),
    option("1100px", "1100px"),
    option("1394px", "1394px"),
];

/// The five editable fields of the article style record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];

    /// The catalog a control for this field may offer; nothing outside this
    /// slice is ever a legal selection.
    pub fn catalog(self) -> &'static [StyleOption] {
        match self {
            SettingsField::FontFamily => FONT_FAMILY_OPTIONS,
            SettingsField::FontSize => FONT_SIZE_OPTIONS,
            SettingsField::FontColor => FONT_COLORS,
            SettingsField::BackgroundColor => BACKGROUND_COLORS,
            SettingsField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Control caption shown in the params panel.
    pub fn title(self) -> &'static str {
        match self {
            SettingsField::FontFamily => "Font",
            SettingsField::FontSize => "Font size",
            SettingsField::FontColor => "Font color",
            SettingsField::BackgroundColor => "Background",
            SettingsField::ContentWidth => "Content width",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_non_empty_and_default_heads_match_docs() {
        for field in SettingsField::ALL {
            assert!(!field.catalog().is_empty(), "{:?} catalog empty", field);
        }
        assert_eq!(FONT_FAMILY_OPTIONS[0].label, "open-sans");
        assert_eq!(CONTENT_WIDTH_OPTIONS[0].value, "800px");
        assert_eq!(FONT_COLORS[0].label, "black");
        assert_eq!(BACKGROUND_COLORS[0].label, "white");
    }

    #[test]
    fn labels_are_unique_within_each_catalog() {
        for field in SettingsField::ALL {
            let catalog = field.catalog();
            for (i, a) in catalog.iter().enumerate() {
                for b in &catalog[i + 1..] {
                    assert_ne!(a.label, b.label, "duplicate label in {:?}", field);
                }
            }
        }
    }
}
