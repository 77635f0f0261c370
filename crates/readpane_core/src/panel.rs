//! Two-state panel machine tying the draft form to the dismissal controller.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::dismiss::{DismissalController, EventHub, RegionHandle};
use crate::options::{SettingsField, StyleOption};
use crate::settings::{ArticleStyleSettings, SettingsForm};

/// The panel is either fully closed or fully open; commit is synchronous and
/// local, so there is no intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

/// The collapsible settings panel: open/closed state, the draft form, and the
/// dismissal controller, wired so that every close path releases the
/// listeners and every open reinitializes the draft from the committed
/// record.
pub struct SettingsPanel {
    state: PanelState,
    form: SettingsForm,
    dismiss: DismissalController,
    dismiss_requests: Rc<Cell<u32>>,
}

impl SettingsPanel {
    pub fn new(hub: EventHub) -> Self {
        let requests = Rc::new(Cell::new(0));
        let latch = Rc::clone(&requests);
        let dismiss = DismissalController::new(hub, move || {
            latch.set(latch.get() + 1);
        });
        Self {
            state: PanelState::Closed,
            form: SettingsForm::new(ArticleStyleSettings::default()),
            dismiss,
            dismiss_requests: requests,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn panel_region(&self) -> RegionHandle {
        self.dismiss.panel_region()
    }

    pub fn toggle_region(&self) -> RegionHandle {
        self.dismiss.toggle_region()
    }

    /// Flip the open flag, as the arrow button does.
    pub fn toggle(&mut self, committed: ArticleStyleSettings) {
        match self.state {
            PanelState::Closed => self.open(committed),
            PanelState::Open => self.close(),
        }
    }

    /// `Closed -> Open`: reinitialize the draft from the committed record and
    /// attach the dismissal listeners. No-op while already open.
    pub fn open(&mut self, committed: ArticleStyleSettings) {
        if self.state == PanelState::Open {
            return;
        }
        self.form = SettingsForm::new(committed);
        self.state = PanelState::Open;
        self.dismiss.set_open(true);
        debug!("settings panel opened");
    }

    /// `Open -> Closed`: release the listeners and drop any dismissal request
    /// the closing interaction itself produced. No-op while already closed.
    pub fn close(&mut self) {
        if self.state == PanelState::Closed {
            return;
        }
        self.state = PanelState::Closed;
        self.dismiss.set_open(false);
        self.dismiss_requests.set(0);
        debug!("settings panel closed");
    }

    pub fn draft(&self) -> ArticleStyleSettings {
        self.form.draft()
    }

    /// Update one field of the draft. The committed record is untouched.
    pub fn select(&mut self, field: SettingsField, selected: &'static StyleOption) {
        self.form.select(field, selected);
    }

    /// Commit the draft: closes the panel and returns the full record for the
    /// owner to swap in as the new committed settings.
    pub fn submit(&mut self) -> ArticleStyleSettings {
        let committed = self.form.submit();
        self.close();
        committed
    }

    /// Dual-target reset: draft and the returned commit value both go back to
    /// the defaults. The panel stays open so the user sees the result.
    pub fn reset(&mut self) -> ArticleStyleSettings {
        self.form.reset()
    }

    /// Drain pending dismissal requests, closing the panel if any fired while
    /// it was open. Safe to call in any state; returns whether a close
    /// happened.
    pub fn process_dismissals(&mut self) -> bool {
        let pending = self.dismiss_requests.replace(0);
        if pending == 0 || self.state == PanelState::Closed {
            return false;
        }
        debug!(pending, "closing settings panel on dismissal");
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dismiss::{DocEvent, Key, Point, Region};
    use crate::options::{FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS};

    const INSIDE: Point = Point { x: 100.0, y: 200.0 };
    const OUTSIDE: Point = Point { x: 700.0, y: 200.0 };
    const ON_TOGGLE: Point = Point { x: 310.0, y: 300.0 };

    fn panel_with_regions(hub: &EventHub) -> SettingsPanel {
        let panel = SettingsPanel::new(hub.clone());
        panel
            .panel_region()
            .set(Some(Region::new(0.0, 0.0, 300.0, 600.0)));
        panel
            .toggle_region()
            .set(Some(Region::new(300.0, 280.0, 340.0, 320.0)));
        panel
    }

    #[test]
    fn closed_panel_holds_zero_listeners_after_any_toggle_sequence() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        let committed = ArticleStyleSettings::default();

        for _ in 0..7 {
            panel.toggle(committed);
            panel.toggle(committed);
        }
        assert!(!panel.is_open());
        assert_eq!(hub.pointer_down_listeners(), 0);
        assert_eq!(hub.key_down_listeners(), 0);
    }

    #[test]
    fn open_attaches_exactly_one_listener_per_class() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        let committed = ArticleStyleSettings::default();

        for _ in 0..5 {
            panel.toggle(committed);
            panel.toggle(committed);
        }
        panel.toggle(committed);
        assert!(panel.is_open());
        assert_eq!(hub.pointer_down_listeners(), 1);
        assert_eq!(hub.key_down_listeners(), 1);
    }

    #[test]
    fn outside_click_closes_and_inside_click_does_not() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        panel.open(ArticleStyleSettings::default());

        hub.dispatch(&DocEvent::PointerDown(INSIDE));
        assert!(!panel.process_dismissals());
        assert!(panel.is_open());

        hub.dispatch(&DocEvent::PointerDown(OUTSIDE));
        assert!(panel.process_dismissals());
        assert!(!panel.is_open());
        assert_eq!(hub.pointer_down_listeners(), 0);
    }

    #[test]
    fn toggle_button_click_is_not_outside() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        panel.open(ArticleStyleSettings::default());

        hub.dispatch(&DocEvent::PointerDown(ON_TOGGLE));
        assert!(!panel.process_dismissals());
        assert!(panel.is_open());
    }

    #[test]
    fn escape_closes_while_open_and_is_a_no_op_while_closed() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);

        hub.dispatch(&DocEvent::KeyDown(Key::Escape));
        assert!(!panel.process_dismissals());
        assert!(!panel.is_open());

        panel.open(ArticleStyleSettings::default());
        hub.dispatch(&DocEvent::KeyDown(Key::Escape));
        assert!(panel.process_dismissals());
        assert!(!panel.is_open());
    }

    #[test]
    fn draft_edits_are_discarded_on_close_without_submit() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        let committed = ArticleStyleSettings::default();

        panel.open(committed);
        panel.select(SettingsField::FontFamily, &FONT_FAMILY_OPTIONS[1]);
        panel.close();

        panel.open(committed);
        assert_eq!(panel.draft(), committed);
    }

    #[test]
    fn submit_commits_all_edited_fields_at_once_and_closes() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        let before = ArticleStyleSettings::default();

        panel.open(before);
        panel.select(SettingsField::FontFamily, &FONT_FAMILY_OPTIONS[3]);
        panel.select(SettingsField::FontSize, &FONT_SIZE_OPTIONS[2]);
        panel.select(SettingsField::FontColor, &FONT_COLORS[4]);

        // Nothing committed yet: the owner still holds the old record.
        assert_eq!(before, ArticleStyleSettings::default());

        let committed = panel.submit();
        assert_eq!(committed.font_family, &FONT_FAMILY_OPTIONS[3]);
        assert_eq!(committed.font_size, &FONT_SIZE_OPTIONS[2]);
        assert_eq!(committed.font_color, &FONT_COLORS[4]);
        assert!(!panel.is_open());
        assert_eq!(hub.key_down_listeners(), 0);
    }

    #[test]
    fn reset_restores_defaults_in_draft_and_commit_and_stays_open() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        panel.open(ArticleStyleSettings::default());
        panel.select(SettingsField::FontFamily, &FONT_FAMILY_OPTIONS[2]);
        let edited = panel.submit();
        assert_ne!(edited, ArticleStyleSettings::default());

        panel.open(edited);
        let committed = panel.reset();
        assert!(panel.is_open());
        assert_eq!(committed, ArticleStyleSettings::default());
        assert_eq!(panel.draft(), ArticleStyleSettings::default());
        assert_eq!(committed.font_family.label, "open-sans");
        assert_eq!(committed.content_width.value, "800px");
    }

    #[test]
    fn stale_dismissal_from_the_closing_frame_does_not_leak_into_next_open() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        panel.open(ArticleStyleSettings::default());

        // Outside click fires the latch, but the panel is closed by the
        // toggle before the owner drains it.
        hub.dispatch(&DocEvent::PointerDown(OUTSIDE));
        panel.close();

        panel.open(ArticleStyleSettings::default());
        assert!(!panel.process_dismissals());
        assert!(panel.is_open());
    }

    #[test]
    fn dropping_an_open_panel_releases_listeners() {
        let hub = EventHub::new();
        let mut panel = panel_with_regions(&hub);
        panel.open(ArticleStyleSettings::default());
        drop(panel);
        assert_eq!(hub.pointer_down_listeners(), 0);
        assert_eq!(hub.key_down_listeners(), 0);
    }
}
