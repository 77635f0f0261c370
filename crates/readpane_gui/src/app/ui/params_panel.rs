//! Left-side collapsible panel with the article style controls.
//!
//! All controls edit the panel's draft; nothing reaches the committed record
//! until Apply, and Reset swaps both draft and committed back to defaults.

use super::super::style::COLOR_TEXT_MUTED;
use super::super::*;
use eframe::egui::{self, RichText};
use readpane_core::options::{SettingsField, FONT_SIZE_OPTIONS};

impl ReadPaneApp {
    pub(crate) fn render_params_panel(&mut self, ctx: &egui::Context) {
        if !self.panel.is_open() {
            self.panel.panel_region().set(None);
            return;
        }

        let response = egui::SidePanel::left("article_params")
            .exact_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Article style");
                ui.add_space(12.0);

                self.option_combo(ui, SettingsField::FontFamily);
                self.font_size_row(ui);
                self.option_combo(ui, SettingsField::FontColor);
                ui.separator();
                self.option_combo(ui, SettingsField::BackgroundColor);
                self.option_combo(ui, SettingsField::ContentWidth);

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        let defaults = self.panel.reset();
                        self.apply_settings(defaults);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Apply").clicked() {
                            let committed = self.panel.submit();
                            self.apply_settings(committed);
                        }
                    });
                });
            });

        self.panel
            .panel_region()
            .set(Some(to_region(response.response.rect)));
    }

    fn option_combo(&mut self, ui: &mut egui::Ui, field: SettingsField) {
        let current = self.panel.draft().get(field);
        ui.label(RichText::new(field.title()).small().color(COLOR_TEXT_MUTED));
        egui::ComboBox::from_id_salt(field.title())
            .width(ui.available_width())
            .selected_text(current.label)
            .show_ui(ui, |ui| {
                for option in field.catalog() {
                    if ui.selectable_label(option == current, option.label).clicked() {
                        self.panel.select(field, option);
                    }
                }
            });
        ui.add_space(6.0);
    }

    fn font_size_row(&mut self, ui: &mut egui::Ui) {
        let current = self.panel.draft().get(SettingsField::FontSize);
        ui.label(
            RichText::new(SettingsField::FontSize.title())
                .small()
                .color(COLOR_TEXT_MUTED),
        );
        ui.horizontal(|ui| {
            for option in FONT_SIZE_OPTIONS {
                if ui.selectable_label(option == current, option.label).clicked() {
                    self.panel.select(SettingsField::FontSize, option);
                }
            }
        });
        ui.add_space(6.0);
    }
}
