//! In-memory hosts.
//!
//! [`MemoryElement`] and [`MemoryWindow`] keep their geometry in cells that the owner sets
//! directly. They back headless hosts (TUI layouts, simulations) and the crate's tests.
//! Scroll events are dispatched synchronously.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::{
    ClientRect, Element, GlobalViewport, ListenerId, ScrollBehavior, ScrollEvent, ScrollListener,
    ScrollSource, ScrollToOptions,
};

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerId, ScrollListener)>>,
    dispatched: Cell<u64>,
}

impl Listeners {
    fn add(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.entries.borrow_mut().push((id, listener));
        id
    }

    fn remove(&self, id: ListenerId) {
        self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn dispatch(&self, source: ScrollSource) -> ScrollEvent {
        let seq = self.dispatched.get().wrapping_add(1);
        self.dispatched.set(seq);
        let event = ScrollEvent {
            source,
            time_stamp: seq as f64,
        };

        // Listeners may detach themselves (or others) while handling the event.
        let snapshot: Vec<ScrollListener> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(&event);
        }
        event
    }
}

/// An element whose layout is whatever its owner last set.
#[derive(Default)]
pub struct MemoryElement {
    client_width: Cell<f64>,
    client_height: Cell<f64>,
    scroll_width: Cell<f64>,
    scroll_height: Cell<f64>,
    scroll_top: Cell<f64>,
    scroll_left: Cell<f64>,
    offset_top: Cell<f64>,
    offset_parent: RefCell<Option<Rc<dyn Element>>>,
    rect: Cell<ClientRect>,
    last_behavior: Cell<Option<ScrollBehavior>>,
    listeners: Listeners,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client_size(self, width: f64, height: f64) -> Self {
        self.set_client_size(width, height);
        self
    }

    pub fn with_scroll_size(self, width: f64, height: f64) -> Self {
        self.set_scroll_size(width, height);
        self
    }

    pub fn with_offset_top(self, offset_top: f64) -> Self {
        self.offset_top.set(offset_top);
        self
    }

    pub fn with_offset_parent(self, parent: Rc<dyn Element>) -> Self {
        self.set_offset_parent(Some(parent));
        self
    }

    pub fn with_bounding_client_rect(self, rect: ClientRect) -> Self {
        self.rect.set(rect);
        self
    }

    pub fn set_client_size(&self, width: f64, height: f64) {
        self.client_width.set(width);
        self.client_height.set(height);
    }

    /// Sets the scrollable content size. Must be at least the client size for offsets
    /// measured from the far edges to be meaningful.
    pub fn set_scroll_size(&self, width: f64, height: f64) {
        self.scroll_width.set(width);
        self.scroll_height.set(height);
    }

    pub fn set_offset_top(&self, offset_top: f64) {
        self.offset_top.set(offset_top);
    }

    pub fn set_offset_parent(&self, parent: Option<Rc<dyn Element>>) {
        *self.offset_parent.borrow_mut() = parent;
    }

    pub fn set_bounding_client_rect(&self, rect: ClientRect) {
        self.rect.set(rect);
    }

    /// Moves the scroll position without firing an event.
    pub fn set_scroll_position(&self, top: f64, left: f64) {
        self.scroll_top.set(top);
        self.scroll_left.set(left);
    }

    /// Fires a scroll event at every attached listener and returns it.
    pub fn dispatch_scroll(&self) -> ScrollEvent {
        self.listeners.dispatch(ScrollSource::Element)
    }

    /// Moves the scroll position, then fires a scroll event (like a user scroll).
    pub fn scroll_by_user(&self, top: f64, left: f64) -> ScrollEvent {
        self.set_scroll_position(top, left);
        self.dispatch_scroll()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The behavior passed to the most recent `scroll_to`.
    pub fn last_scroll_behavior(&self) -> Option<ScrollBehavior> {
        self.last_behavior.get()
    }
}

impl Element for MemoryElement {
    fn client_width(&self) -> f64 {
        self.client_width.get()
    }

    fn client_height(&self) -> f64 {
        self.client_height.get()
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width.get()
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height.get()
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left.get()
    }

    fn offset_top(&self) -> f64 {
        self.offset_top.get()
    }

    fn offset_parent(&self) -> Option<Rc<dyn Element>> {
        self.offset_parent.borrow().clone()
    }

    fn bounding_client_rect(&self) -> ClientRect {
        self.rect.get()
    }

    fn scroll_to(&self, top: Option<f64>, left: Option<f64>, behavior: ScrollBehavior) {
        self.last_behavior.set(Some(behavior));
        let top = top.unwrap_or(self.scroll_top.get());
        let left = left.unwrap_or(self.scroll_left.get());
        if top == self.scroll_top.get() && left == self.scroll_left.get() {
            return;
        }
        self.scroll_by_user(top, left);
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("client_width", &self.client_width.get())
            .field("client_height", &self.client_height.get())
            .field("scroll_top", &self.scroll_top.get())
            .field("scroll_left", &self.scroll_left.get())
            .field("offset_top", &self.offset_top.get())
            .field("has_offset_parent", &self.offset_parent.borrow().is_some())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// A window with a fixed inner size that records scroll requests.
#[derive(Default)]
pub struct MemoryWindow {
    inner_width: Cell<f64>,
    inner_height: Cell<f64>,
    scroll_x: Cell<f64>,
    scroll_y: Cell<f64>,
    last_scroll_to: Cell<Option<ScrollToOptions>>,
    listeners: Listeners,
}

impl MemoryWindow {
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        let window = Self::default();
        window.set_inner_size(inner_width, inner_height);
        window
    }

    pub fn set_inner_size(&self, width: f64, height: f64) {
        self.inner_width.set(width);
        self.inner_height.set(height);
    }

    pub fn scroll_x(&self) -> f64 {
        self.scroll_x.get()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// The options passed to the most recent `scroll_to`, verbatim.
    pub fn last_scroll_to(&self) -> Option<ScrollToOptions> {
        self.last_scroll_to.get()
    }

    pub fn dispatch_scroll(&self) -> ScrollEvent {
        self.listeners.dispatch(ScrollSource::Window)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl GlobalViewport for MemoryWindow {
    fn inner_width(&self) -> f64 {
        self.inner_width.get()
    }

    fn inner_height(&self) -> f64 {
        self.inner_height.get()
    }

    fn scroll_to(&self, options: &ScrollToOptions) {
        self.last_scroll_to.set(Some(*options));
        if let Some(top) = options.top {
            self.scroll_y.set(top);
        }
        if let Some(left) = options.left {
            self.scroll_x.set(left);
        }
        self.dispatch_scroll();
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

impl fmt::Debug for MemoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryWindow")
            .field("inner_width", &self.inner_width.get())
            .field("inner_height", &self.inner_height.get())
            .field("scroll_x", &self.scroll_x.get())
            .field("scroll_y", &self.scroll_y.get())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
