//! Central article view styled from the committed settings.

use super::super::style::{parse_hex_color, px_to_points};
use super::super::*;
use eframe::egui::{self, Color32, FontId, Margin, RichText};

impl ReadPaneApp {
    pub(crate) fn render_article(&mut self, ctx: &egui::Context) {
        let background = parse_hex_color(self.committed.background_color.value)
            .unwrap_or(Color32::WHITE);
        let text_color = parse_hex_color(self.committed.font_color.value).unwrap_or(Color32::BLACK);
        let body_size = px_to_points(self.committed.font_size.value).unwrap_or(18.0);
        let family = self.article_font_family(self.committed.font_family);
        let body_font = FontId::new(body_size, family.clone());
        let subtitle_font = FontId::new(body_size * 1.1, family.clone());
        let title_font = FontId::new(body_size * 1.6, family);
        let max_width = px_to_points(self.committed.content_width.value).unwrap_or(800.0);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(background)
                    .inner_margin(Margin::symmetric(24, 24)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let column = max_width.min(ui.available_width());
                    let pad = ((ui.available_width() - column) / 2.0).max(0.0);
                    ui.horizontal_top(|ui| {
                        ui.add_space(pad);
                        ui.vertical(|ui| {
                            ui.set_max_width(column);
                            ui.spacing_mut().item_spacing.y = body_size * 0.8;
                            ui.label(
                                RichText::new(&self.article.title)
                                    .font(title_font.clone())
                                    .color(text_color)
                                    .strong(),
                            );
                            if !self.article.subtitle.is_empty() {
                                ui.label(
                                    RichText::new(&self.article.subtitle)
                                        .font(subtitle_font.clone())
                                        .color(text_color)
                                        .italics(),
                                );
                            }
                            for paragraph in &self.article.paragraphs {
                                ui.label(
                                    RichText::new(paragraph)
                                        .font(body_font.clone())
                                        .color(text_color),
                                );
                            }
                        });
                    });
                });
            });
    }
}
