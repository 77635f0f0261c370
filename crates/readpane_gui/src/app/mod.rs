//! egui application shell for the reader.
//!
//! The shell owns the committed [`ArticleStyleSettings`] record and the
//! [`SettingsPanel`]; each frame renders the surfaces, publishes the panel
//! and toggle rects into the core region handles, then feeds the frame's raw
//! input through the dismissal hub.

mod style;
mod ui;


use eframe::egui;
use readpane_core::article::Article;
use readpane_core::dismiss::{DocEvent, EventHub, Key, Point, Region};
use readpane_core::panel::SettingsPanel;
use readpane_core::settings::ArticleStyleSettings;
use readpane_core::{AppError, Config};
use tracing::{info, trace};

#[doc = "Default initial window size for native startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];
#[doc = "Minimum enforced window size keeping the panel and column usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [700.0, 500.0];
const PANEL_WIDTH: f32 = 300.0;

/// Where the rendered article came from, for the status bar.
enum ArticleSource {
    Sample,
    File(String),
}

/// Native egui application shell for the reader.
pub(crate) struct ReadPaneApp {
    committed: ArticleStyleSettings,
    panel: SettingsPanel,
    hub: EventHub,
    article: Article,
    article_source: ArticleSource,
    dismiss_trace: bool,
    style_applied: bool,
    serif_loaded: bool,
}

impl ReadPaneApp {
    /// Construct the app from a loaded [`Config`].
    ///
    /// # Errors
    /// Returns an error when a configured article file cannot be read or
    /// holds no content.
    pub(crate) fn new(config: Config) -> Result<Self, AppError> {
        let (article, article_source) = match &config.article_path {
            Some(path) => {
                let article = Article::load(path)?;
                info!("loaded article from {}", path.display());
                (article, ArticleSource::File(path.display().to_string()))
            }
            None => (Article::sample(), ArticleSource::Sample),
        };

        let hub = EventHub::new();
        let panel = SettingsPanel::new(hub.clone());
        Ok(Self {
            committed: ArticleStyleSettings::default(),
            panel,
            hub,
            article,
            article_source,
            dismiss_trace: config.dismiss_trace,
            style_applied: false,
            serif_loaded: false,
        })
    }

    /// Swap in a new committed record. Always a whole-record replacement;
    /// field edits stay confined to the panel's draft.
    fn apply_settings(&mut self, settings: ArticleStyleSettings) {
        if settings != self.committed {
            info!(
                font = settings.font_family.label,
                size = settings.font_size.value,
                width = settings.content_width.value,
                "applying article style"
            );
        }
        self.committed = settings;
    }

    fn toggle_panel(&mut self) {
        self.panel.toggle(self.committed);
        info!(open = self.panel.is_open(), "settings panel toggled");
    }

    /// One full frame: render every surface, then route this frame's raw
    /// input through the hub and drain the dismissal latch. Side and bottom
    /// panels go first so the central article panel takes the remainder.
    fn frame(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);
        self.render_params_panel(ctx);
        self.render_status_bar(ctx);
        self.render_article(ctx);
        self.render_arrow_button(ctx);
        self.pump_document_events(ctx);
    }

    fn pump_document_events(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|input| collect_doc_events(&input.events));
        for event in &events {
            if self.dismiss_trace {
                trace!(?event, "document event");
            }
            self.hub.dispatch(event);
        }
        if self.panel.process_dismissals() {
            info!("settings panel dismissed");
        }
    }
}

impl eframe::App for ReadPaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

/// Reduce a frame's raw egui events to the document-level events the
/// dismissal hub understands: primary pointer presses and initial key-downs.
fn collect_doc_events(events: &[egui::Event]) -> Vec<DocEvent> {
    events.iter().filter_map(map_doc_event).collect()
}

fn map_doc_event(event: &egui::Event) -> Option<DocEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => Some(DocEvent::PointerDown(Point { x: pos.x, y: pos.y })),
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => {
            let key = if *key == egui::Key::Escape {
                Key::Escape
            } else {
                Key::Other
            };
            Some(DocEvent::KeyDown(key))
        }
        _ => None,
    }
}

fn to_region(rect: egui::Rect) -> Region {
    Region::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}
