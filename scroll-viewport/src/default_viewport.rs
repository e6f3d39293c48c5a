use alloc::rc::Rc;
use core::fmt;

use crate::{
    ContainerRef, Directionality, Edge, Element, Orientation, Px, RtlScrollAxisType, ScrollEvents,
    ScrollToOptions, Scrollable,
};

/// Viewport strategy for a list element that is its own scroll container.
///
/// Sizes come straight from the element, and the element's CSS decides its size, so
/// [`ContainerRef::viewport_size`] is always `None`.
pub struct DefaultViewport {
    element: Rc<dyn Element>,
    scrollable: Scrollable<Rc<dyn Element>>,
}

impl DefaultViewport {
    pub fn new(element: Rc<dyn Element>) -> Self {
        Self {
            scrollable: Scrollable::new(Rc::clone(&element)),
            element,
        }
    }

    pub fn with_directionality(mut self, dir: Option<Rc<dyn Directionality>>) -> Self {
        self.scrollable = self.scrollable.with_directionality(dir);
        self
    }

    pub fn with_rtl_scroll_axis_type(mut self, axis_type: RtlScrollAxisType) -> Self {
        self.scrollable = self.scrollable.with_rtl_scroll_axis_type(axis_type);
        self
    }

    pub fn element(&self) -> &Rc<dyn Element> {
        &self.element
    }

    pub fn scrollable(&self) -> &Scrollable<Rc<dyn Element>> {
        &self.scrollable
    }
}

impl ContainerRef for DefaultViewport {
    fn measure_scroll_offset(&self, from: Edge) -> f64 {
        self.scrollable.measure_scroll_offset(from)
    }

    fn measure_container_size(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.element.client_width(),
            Orientation::Vertical => self.element.client_height(),
        }
    }

    fn viewport_size(&self, _content_size: f64) -> Option<Px> {
        None
    }

    fn element_scrolled(&self) -> ScrollEvents {
        self.scrollable.element_scrolled()
    }

    fn scroll_to(&self, options: ScrollToOptions) {
        self.scrollable.scroll_to(options);
    }

    fn dispose(&self) {
        self.scrollable.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.scrollable.is_disposed()
    }
}

impl fmt::Debug for DefaultViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultViewport")
            .field("disposed", &self.scrollable.is_disposed())
            .finish_non_exhaustive()
    }
}
