//! Headless interactive core for the ReadPane reader.
//!
//! Everything in this crate is toolkit-agnostic: the GUI feeds document-level
//! events in through [`dismiss::EventHub`] and reads settings records out.
//! There is no rendering code here, which keeps the panel state machine and
//! the draft/commit flow testable without a window.

pub mod article;
pub mod config;
pub mod dismiss;
pub mod error;
pub mod options;
pub mod panel;
pub mod settings;

pub use config::Config;
pub use error::AppError;
