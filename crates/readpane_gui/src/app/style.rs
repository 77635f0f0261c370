//! Theme constants, one-time style application, and mapping from catalog
//! option values to egui font/color types.

use super::ReadPaneApp;
use eframe::egui::{self, Color32, FontData, FontDefinitions, FontFamily, Stroke, Visuals};
use readpane_core::options::StyleOption;
use tracing::warn;

pub(super) const COLOR_PANEL_BG: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf2);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6e, 0x76, 0x81);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0xd4, 0xd4, 0xd0);

const SERIF_FONT: &str = "SystemSerif";
pub(super) const SERIF_FAMILY: &str = "Serif";

/// Regular serif faces commonly present on the three desktop platforms.
/// `.ttc` collections are skipped since a single-face load is ambiguous.
const SERIF_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
];

impl ReadPaneApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut fonts = FontDefinitions::default();
        self.serif_loaded = register_serif_family(&mut fonts);
        if !self.serif_loaded {
            warn!("no system serif font found; serif options fall back to the default family");
        }
        ctx.set_fonts(fonts);

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::light();
        style.visuals.panel_fill = COLOR_PANEL_BG;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);

        self.style_applied = true;
    }

    /// egui font family for a catalog font option. Serif stacks map to the
    /// registered system serif when one loaded; everything else uses the
    /// default proportional family.
    pub(super) fn article_font_family(&self, option: &StyleOption) -> FontFamily {
        if self.serif_loaded && is_serif_stack(option.value) {
            FontFamily::Name(SERIF_FAMILY.into())
        } else {
            FontFamily::Proportional
        }
    }
}

/// Try to load one of the known system serif faces and register it as the
/// head of a named family, keeping the default proportional fonts as
/// fallback for glyph coverage.
fn register_serif_family(fonts: &mut FontDefinitions) -> bool {
    for path in SERIF_CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        fonts
            .font_data
            .insert(SERIF_FONT.to_string(), FontData::from_owned(bytes).into());
        let mut family = vec![SERIF_FONT.to_string()];
        if let Some(proportional) = fonts.families.get(&FontFamily::Proportional) {
            family.extend(proportional.iter().cloned());
        }
        fonts
            .families
            .insert(FontFamily::Name(SERIF_FAMILY.into()), family);
        return true;
    }
    false
}

/// Whether a CSS-style font stack ends in the generic `serif` family.
pub(super) fn is_serif_stack(value: &str) -> bool {
    value.rsplit(',').next().map(str::trim) == Some("serif")
}

/// Parse a `#RRGGBB` catalog color value.
pub(super) fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Parse a `NNpx` catalog length value into points.
pub(super) fn px_to_points(value: &str) -> Option<f32> {
    value.strip_suffix("px")?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use readpane_core::options::{CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS};

    #[test]
    fn hex_colors_in_the_catalogs_all_parse() {
        for option in FONT_COLORS {
            assert!(
                parse_hex_color(option.value).is_some(),
                "unparseable color {}",
                option.value
            );
        }
        assert_eq!(
            parse_hex_color("#C4C4C4"),
            Some(Color32::from_rgb(0xc4, 0xc4, 0xc4))
        );
        assert_eq!(parse_hex_color("C4C4C4"), None);
        assert_eq!(parse_hex_color("#C4C4"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn px_lengths_in_the_catalogs_all_parse() {
        for option in CONTENT_WIDTH_OPTIONS {
            assert!(px_to_points(option.value).is_some());
        }
        assert_eq!(px_to_points("18px"), Some(18.0));
        assert_eq!(px_to_points("18"), None);
        assert_eq!(px_to_points("wide-px"), None);
    }

    #[test]
    fn serif_stacks_are_detected_from_catalog_values() {
        let by_label = |label: &str| {
            FONT_FAMILY_OPTIONS
                .iter()
                .find(|option| option.label == label)
                .expect("catalog entry")
        };
        assert!(is_serif_stack(by_label("merriweather").value));
        assert!(is_serif_stack(by_label("cormorant-garamond").value));
        assert!(!is_serif_stack(by_label("open-sans").value));
        assert!(!is_serif_stack(by_label("days-one").value));
    }
}
