//! Document-level dismissal plumbing: event hub, RAII subscriptions, and the
//! outside-click / Escape controller.
//!
//! The GUI translates raw toolkit input into [`DocEvent`]s and pushes them
//! through an [`EventHub`]. While the panel is open the
//! [`DismissalController`] holds one pointer-down and one key-down
//! [`Subscription`]; both are released on close and on drop, so a closed
//! panel imposes zero listening cost and cannot fire callbacks.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned screen region; edges count as inside.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Region {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Keys the dismissal flow cares about; everything else folds into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Document-level input event, decoupled from any rendering toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocEvent {
    PointerDown(Point),
    KeyDown(Key),
}

/// Cloneable capability answering "is this point inside the tracked region".
///
/// The region owner publishes the rect after each layout pass; listeners only
/// read. An unset region contains nothing.
#[derive(Clone, Default)]
pub struct RegionHandle {
    rect: Rc<Cell<Option<Region>>>,
}

impl RegionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, region: Option<Region>) {
        self.rect.set(region);
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.get().is_some_and(|region| region.contains(point))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventClass {
    PointerDown,
    KeyDown,
}

impl EventClass {
    fn of(event: &DocEvent) -> Self {
        match event {
            DocEvent::PointerDown(_) => EventClass::PointerDown,
            DocEvent::KeyDown(_) => EventClass::KeyDown,
        }
    }
}

type Listener = Box<dyn FnMut(&DocEvent)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    pointer_down: Vec<(u64, Listener)>,
    key_down: Vec<(u64, Listener)>,
}

impl HubInner {
    fn slot(&mut self, class: EventClass) -> &mut Vec<(u64, Listener)> {
        match class {
            EventClass::PointerDown => &mut self.pointer_down,
            EventClass::KeyDown => &mut self.key_down,
        }
    }
}

/// Single-threaded listener registry standing in for document-level event
/// subscription.
///
/// Invariant: listeners must not call back into the hub during dispatch (the
/// registry is borrowed for the whole dispatch). The dismissal listeners only
/// touch shared cells, which keeps this trivially true.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_pointer_down(
        &self,
        listener: impl FnMut(&DocEvent) + 'static,
    ) -> Subscription {
        self.subscribe(EventClass::PointerDown, Box::new(listener))
    }

    pub fn subscribe_key_down(&self, listener: impl FnMut(&DocEvent) + 'static) -> Subscription {
        self.subscribe(EventClass::KeyDown, Box::new(listener))
    }

    fn subscribe(&self, class: EventClass, listener: Listener) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.slot(class).push((id, listener));
        Subscription {
            hub: Rc::downgrade(&self.inner),
            class,
            id,
        }
    }

    /// Run every listener registered for the event's class.
    pub fn dispatch(&self, event: &DocEvent) {
        let mut inner = self.inner.borrow_mut();
        for (_, listener) in inner.slot(EventClass::of(event)).iter_mut() {
            listener(event);
        }
    }

    pub fn pointer_down_listeners(&self) -> usize {
        self.inner.borrow().pointer_down.len()
    }

    pub fn key_down_listeners(&self) -> usize {
        self.inner.borrow().key_down.len()
    }
}

/// Detaches its listener when dropped. Dropping after the hub itself is gone
/// is a no-op, so teardown order does not matter.
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    class: EventClass,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.slot(self.class).retain(|(id, _)| *id != self.id);
        }
    }
}

/// Closes an open panel in response to a pointer-down outside it or an
/// Escape key-down, without interfering with interaction inside the panel.
///
/// The toggle button gets its own excluded region: a click there already
/// flips the open flag, so counting it as "outside" would immediately reopen
/// what it just closed.
///
/// The callback fires once per qualifying event with no debouncing; the
/// consumer is responsible for handling a callback that races an
/// already-closed panel idempotently.
pub struct DismissalController {
    hub: EventHub,
    panel_region: RegionHandle,
    toggle_region: RegionHandle,
    on_dismiss: Rc<RefCell<dyn FnMut()>>,
    subs: Option<(Subscription, Subscription)>,
}

impl DismissalController {
    pub fn new(hub: EventHub, on_dismiss: impl FnMut() + 'static) -> Self {
        Self {
            hub,
            panel_region: RegionHandle::new(),
            toggle_region: RegionHandle::new(),
            on_dismiss: Rc::new(RefCell::new(on_dismiss)),
            subs: None,
        }
    }

    /// Handle the panel owner updates with the panel's on-screen rect.
    pub fn panel_region(&self) -> RegionHandle {
        self.panel_region.clone()
    }

    /// Handle for the toggle button's rect, excluded from the outside test.
    pub fn toggle_region(&self) -> RegionHandle {
        self.toggle_region.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.subs.is_some()
    }

    /// Attach the listener pair on `Closed -> Open`, release it on
    /// `Open -> Closed`. Idempotent in both directions; dropping the
    /// controller releases as well, so every exit path detaches.
    pub fn set_open(&mut self, open: bool) {
        if open == self.subs.is_some() {
            return;
        }
        if open {
            let panel = self.panel_region.clone();
            let toggle = self.toggle_region.clone();
            let notify = Rc::clone(&self.on_dismiss);
            let pointer = self.hub.subscribe_pointer_down(move |event| {
                if let DocEvent::PointerDown(point) = event {
                    if !panel.contains(*point) && !toggle.contains(*point) {
                        trace!(x = point.x, y = point.y, "outside pointer-down");
                        (notify.borrow_mut())();
                    }
                }
            });
            let notify = Rc::clone(&self.on_dismiss);
            let key = self.hub.subscribe_key_down(move |event| {
                if matches!(event, DocEvent::KeyDown(Key::Escape)) {
                    trace!("escape key-down");
                    (notify.borrow_mut())();
                }
            });
            self.subs = Some((pointer, key));
            debug!("dismissal listeners attached");
        } else {
            self.subs = None;
            debug!("dismissal listeners released");
        }
    }
}
