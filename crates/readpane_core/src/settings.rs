//! Committed style record and the draft form behind the params panel.

use crate::options::{
    SettingsField, StyleOption, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};

/// The committed style configuration the article renders with.
///
/// Owned by the application shell and only ever replaced as a whole record on
/// an explicit submit or reset. Field-level mutation is confined to the draft
/// flow in [`SettingsForm`], which is why the setter is crate-private.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleStyleSettings {
    pub font_family: &'static StyleOption,
    pub font_size: &'static StyleOption,
    pub font_color: &'static StyleOption,
    pub background_color: &'static StyleOption,
    pub content_width: &'static StyleOption,
}

impl Default for ArticleStyleSettings {
    fn default() -> Self {
        Self {
            font_family: &FONT_FAMILY_OPTIONS[0],
            font_size: &FONT_SIZE_OPTIONS[0],
            font_color: &FONT_COLORS[0],
            background_color: &BACKGROUND_COLORS[0],
            content_width: &CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

impl ArticleStyleSettings {
    pub fn get(&self, field: SettingsField) -> &'static StyleOption {
        match field {
            SettingsField::FontFamily => self.font_family,
            SettingsField::FontSize => self.font_size,
            SettingsField::FontColor => self.font_color,
            SettingsField::BackgroundColor => self.background_color,
            SettingsField::ContentWidth => self.content_width,
        }
    }

    pub(crate) fn set(&mut self, field: SettingsField, selected: &'static StyleOption) {
        match field {
            SettingsField::FontFamily => self.font_family = selected,
            SettingsField::FontSize => self.font_size = selected,
            SettingsField::FontColor => self.font_color = selected,
            SettingsField::BackgroundColor => self.background_color = selected,
            SettingsField::ContentWidth => self.content_width = selected,
        }
    }
}

/// Working copy of the settings, scoped to one panel-open session.
///
/// Initialized from the committed record when the panel opens and discarded
/// on close without submit. Edits here never touch the committed record; the
/// owner swaps in whatever [`SettingsForm::submit`] or [`SettingsForm::reset`]
/// returns.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    draft: ArticleStyleSettings,
}

impl SettingsForm {
    pub fn new(committed: ArticleStyleSettings) -> Self {
        Self { draft: committed }
    }

    pub fn draft(&self) -> ArticleStyleSettings {
        self.draft
    }

    /// Update exactly one draft field. Options must come from the field's own
    /// catalog; controls are built from [`SettingsField::catalog`], so no
    /// other value can reach this call.
    pub fn select(&mut self, field: SettingsField, selected: &'static StyleOption) {
        self.draft.set(field, selected);
    }

    /// The full draft as a single record for the owner to commit. The draft
    /// itself is left untouched and is now equal to the committed record.
    pub fn submit(&self) -> ArticleStyleSettings {
        self.draft
    }

    /// Dual-target reset: puts the draft back to the defaults and returns the
    /// same default record for the owner to commit. Not merely a draft clear.
    pub fn reset(&mut self) -> ArticleStyleSettings {
        self.draft = ArticleStyleSettings::default();
        self.draft
    }
}
