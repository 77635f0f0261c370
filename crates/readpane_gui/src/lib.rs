//! Native reader library entry point.
//!
//! Exposes a `run` helper so the binary stays a thin exit-code wrapper
//! around tracing setup and `eframe` launch.

mod app;

use app::ReadPaneApp;
use eframe::egui;
use readpane_core::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("readpane=info,readpane_core=info,readpane_gui=info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the native reader UI with tracing enabled.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when a configured article file cannot be read.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let window_size = config.window_size.unwrap_or(app::DEFAULT_WINDOW_SIZE);
    let app = ReadPaneApp::new(config).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("ReadPane"),
        ..Default::default()
    };

    eframe::run_native("ReadPane", options, Box::new(|_cc| Ok(Box::new(app))))
}
