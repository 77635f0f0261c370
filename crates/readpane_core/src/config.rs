//! Environment-driven runtime configuration.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::error::AppError;

/// Runtime configuration for ReadPane.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional plain-text article to render instead of the embedded sample.
    pub article_path: Option<PathBuf>,
    /// Optional initial window size override.
    pub window_size: Option<[f32; 2]>,
    /// Emit a trace line for every document event fed to the dismissal hub.
    pub dismiss_trace: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `READPANE_ARTICLE` (path),
    /// `READPANE_WINDOW` (`WIDTHxHEIGHT`), `READPANE_DISMISS_TRACE` (flag).
    /// Malformed window specs are logged at warn level and ignored rather
    /// than failing startup.
    pub fn from_env() -> Self {
        let article_path = env::var("READPANE_ARTICLE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let window_size = env::var("READPANE_WINDOW")
            .ok()
            .and_then(|value| match parse_window_spec(&value) {
                Ok(size) => Some(size),
                Err(err) => {
                    warn!("ignoring READPANE_WINDOW: {}", err);
                    None
                }
            });

        Self {
            article_path,
            window_size,
            dismiss_trace: env_flag_enabled("READPANE_DISMISS_TRACE"),
        }
    }
}

/// Minimum window size a spec may request; anything smaller cannot fit the
/// params panel next to a readable column.
pub const WINDOW_FLOOR: [f32; 2] = [480.0, 360.0];

/// Parse a `WIDTHxHEIGHT` window spec such as `1280x800`.
///
/// # Errors
/// Returns [`AppError::Config`] when the spec is not two positive numbers
/// joined by `x`, or when it falls below [`WINDOW_FLOOR`].
pub fn parse_window_spec(value: &str) -> Result<[f32; 2], AppError> {
    let spec = value.trim();
    let (width, height) = spec
        .split_once(['x', 'X'])
        .ok_or_else(|| AppError::Config(format!("window spec '{}' is not WIDTHxHEIGHT", spec)))?;
    let width: f32 = width
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("bad window width in '{}'", spec)))?;
    let height: f32 = height
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("bad window height in '{}'", spec)))?;
    if !width.is_finite() || !height.is_finite() || width < WINDOW_FLOOR[0] || height < WINDOW_FLOOR[1]
    {
        return Err(AppError::Config(format!(
            "window spec '{}' below minimum {}x{}",
            spec, WINDOW_FLOOR[0], WINDOW_FLOOR[1]
        )));
    }
    Ok([width, height])
}

/// Parse a boolean-like environment flag value.
///
/// Truthy: `1`, `true`, `yes`, `on`. Falsy: empty, `0`, `false`, `no`,
/// `off`. Case and surrounding whitespace are ignored; anything else is
/// unrecognized and yields `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment; missing or unrecognized values
/// count as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}
