//! Floating arrow button toggling the params panel.

use super::super::*;
use eframe::egui;

const TOGGLE_MARGIN: f32 = 8.0;

impl ReadPaneApp {
    /// Renders the toggle and publishes its rect so the dismissal controller
    /// can exclude it from the outside-click test: the click already flips
    /// the open flag here, and counting it as outside would reopen what it
    /// just closed.
    pub(crate) fn render_arrow_button(&mut self, ctx: &egui::Context) {
        let open = self.panel.is_open();
        let x = if open {
            PANEL_WIDTH + TOGGLE_MARGIN
        } else {
            TOGGLE_MARGIN
        };
        let y = ctx.screen_rect().center().y;

        let response = egui::Area::new(egui::Id::new("params_toggle"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(x, y))
            .show(ctx, |ui| {
                let arrow = if open { "\u{25c0}" } else { "\u{25b6}" };
                ui.button(arrow)
            })
            .inner;

        self.panel.toggle_region().set(Some(to_region(response.rect)));
        if response.clicked() {
            self.toggle_panel();
        }
    }
}
