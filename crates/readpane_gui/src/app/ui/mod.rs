//! UI surfaces split out of the app frame loop.

/// Floating arrow button toggling the params panel.
pub(super) mod arrow_button;
/// Central article view styled from the committed settings.
pub(super) mod article_view;
/// Left-side collapsible panel with the style controls.
pub(super) mod params_panel;
/// Bottom status bar with the committed-style summary.
pub(super) mod status_bar;
