use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::{
    ContainerRef, Directionality, Edge, Element, GlobalViewport, ListenerId, Orientation, Px,
    ScrollEvent, ScrollEvents, ScrollListener, ScrollSubject, ScrollToOptions,
};

/// Viewport strategy for a list scrolled by the top-level window.
///
/// Construction attaches a single window scroll listener that feeds a broadcast subject.
/// [`ContainerRef::dispose`] detaches it and ends the stream. Dropping the viewport disposes it
/// too.
pub struct WindowViewport {
    element: Rc<dyn Element>,
    window: Rc<dyn GlobalViewport>,
    // Not consulted yet: RTL-aware offsets and scroll-to are unimplemented.
    dir: Option<Rc<dyn Directionality>>,
    scrolled: ScrollSubject,
    listener: Cell<Option<ListenerId>>,
}

impl WindowViewport {
    pub fn new(element: Rc<dyn Element>, window: Rc<dyn GlobalViewport>) -> Self {
        let scrolled = ScrollSubject::new();
        let listener: ScrollListener = {
            let scrolled = scrolled.clone();
            Rc::new(move |event: &ScrollEvent| scrolled.next(event))
        };
        let id = window.add_scroll_listener(listener);
        vdebug!(listener = id.0, "WindowViewport::new");
        Self {
            element,
            window,
            dir: None,
            scrolled,
            listener: Cell::new(Some(id)),
        }
    }

    pub fn with_directionality(mut self, dir: Option<Rc<dyn Directionality>>) -> Self {
        self.dir = dir;
        self
    }

    pub fn element(&self) -> &Rc<dyn Element> {
        &self.element
    }

    pub fn directionality(&self) -> Option<&Rc<dyn Directionality>> {
        self.dir.as_ref()
    }

}

impl ContainerRef for WindowViewport {
    fn measure_scroll_offset(&self, from: Edge) -> f64 {
        if from == Edge::Top {
            return -self.element.bounding_client_rect().top;
        }

        // TODO: Left, Right, Bottom, Start and End (with directionality).
        0.0
    }

    fn measure_container_size(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.window.inner_width(),
            Orientation::Vertical => self.window.inner_height(),
        }
    }

    fn viewport_size(&self, content_size: f64) -> Option<Px> {
        Some(Px(content_size))
    }

    fn element_scrolled(&self) -> ScrollEvents {
        self.scrolled.events()
    }

    // TODO: resolve start/end/right/bottom against directionality before forwarding.
    fn scroll_to(&self, options: ScrollToOptions) {
        self.window.scroll_to(&options);
    }

    fn dispose(&self) {
        if let Some(id) = self.listener.take() {
            self.window.remove_scroll_listener(id);
            vdebug!(listener = id.0, "WindowViewport::dispose");
        }
        self.scrolled.complete();
    }

    fn is_disposed(&self) -> bool {
        self.scrolled.is_completed()
    }
}

impl Drop for WindowViewport {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for WindowViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowViewport")
            .field("listener", &self.listener.get())
            .field("scrolled", &self.scrolled)
            .finish_non_exhaustive()
    }
}
