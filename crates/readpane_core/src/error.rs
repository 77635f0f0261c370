//! Application error types for configuration and article loading.
use thiserror::Error;

/// Top-level application error type.
///
/// The dismissal and draft/commit core has no recoverable error paths by
/// construction (all selectable values come from static catalogs), so errors
/// only surface while the app is starting up.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Article error: {0}")]
    Article(String),
}
