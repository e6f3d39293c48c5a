use alloc::rc::Rc;
use core::fmt;

use crate::{
    ContainerRef, Directionality, Edge, Element, ElementRef, Orientation, Px,
    RelativeParentElementRef, RtlScrollAxisType, ScrollEvents, ScrollToOptions, Scrollable,
};

/// Viewport strategy for a list element that does not scroll itself but sits inside a
/// scrolling ancestor (its offset parent).
///
/// All measurements are taken against the ancestor, which is re-resolved on every call. The
/// list element has no way to grow with its content, so the engine is always told the exact
/// content size to apply.
///
/// The ancestor must exist: a detached or unpositioned viewport measures as `0.0` and cannot
/// be scrolled.
pub struct NestedViewport {
    viewport: Rc<dyn Element>,
    scrollable: Scrollable<RelativeParentElementRef>,
}

impl NestedViewport {
    pub fn new(viewport: Rc<dyn Element>) -> Self {
        let parent_ref = RelativeParentElementRef::new(Rc::clone(&viewport));
        Self {
            viewport,
            scrollable: Scrollable::new(parent_ref),
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

    pub fn viewport_element(&self) -> &Rc<dyn Element> {
        &self.viewport
    }

    /// The ancestor currently doing the scrolling.
    pub fn parent_element(&self) -> Option<Rc<dyn Element>> {
        self.scrollable.element_ref().native_element()
    }

    pub fn scrollable(&self) -> &Scrollable<RelativeParentElementRef> {
        &self.scrollable
    }
}

impl ContainerRef for NestedViewport {
    fn measure_scroll_offset(&self, from: Edge) -> f64 {
        let offset = self.scrollable.measure_scroll_offset(from);

        if from == Edge::Top {
            return offset - self.viewport.offset_top();
        }

        // TODO: correct Left, Right, Bottom, Start and End for the viewport's position inside
        // the ancestor.
        offset
    }

    fn measure_container_size(&self, orientation: Orientation) -> f64 {
        let Some(parent) = self.parent_element() else {
            return 0.0;
        };
        match orientation {
            Orientation::Horizontal => parent.client_width(),
            Orientation::Vertical => parent.client_height(),
        }
    }

    fn viewport_size(&self, content_size: f64) -> Option<Px> {
        Some(Px(content_size))
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

impl fmt::Debug for NestedViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedViewport")
            .field("has_parent", &self.parent_element().is_some())
            .field("disposed", &self.scrollable.is_disposed())
            .finish_non_exhaustive()
    }
}
