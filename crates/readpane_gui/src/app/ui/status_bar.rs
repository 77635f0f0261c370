//! Bottom status bar with the committed-style summary and article source.

use super::super::style::COLOR_TEXT_MUTED;
use super::super::*;
use eframe::egui::{self, RichText};

impl ReadPaneApp {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let summary = format!(
                        "{} / {} / {}",
                        self.committed.font_family.label,
                        self.committed.font_size.value,
                        self.committed.content_width.value
                    );
                    ui.label(RichText::new(summary).small().color(COLOR_TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let source = match &self.article_source {
                            ArticleSource::Sample => "sample article".to_string(),
                            ArticleSource::File(path) => path.clone(),
                        };
                        ui.add(
                            egui::Label::new(
                                RichText::new(source)
                                    .small()
                                    .monospace()
                                    .color(COLOR_TEXT_MUTED),
                            )
                            .truncate(),
                        );
                    });
                });
            });
    }
}
