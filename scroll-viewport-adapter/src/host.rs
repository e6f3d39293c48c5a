use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;
use core::ops::Deref;

use scroll_viewport::{
    ContainerRef, Element, GlobalViewport, Orientation, ScrollEvent, Subscription,
    ViewportMetrics, measure_metrics,
};

use crate::{ViewportMode, ViewportOptions, create_container};

/// Owns the viewport strategy for one virtual-scroll viewport.
///
/// The owning component calls [`ViewportHost::close`] when it is torn down; dropping the host
/// closes it as well. The strategy is disposed exactly once either way.
pub struct ViewportHost {
    mode: ViewportMode,
    container: Rc<dyn ContainerRef>,
    closed: Cell<bool>,
}

impl ViewportHost {
    pub fn new(
        options: &ViewportOptions,
        element: Rc<dyn Element>,
        window: Rc<dyn GlobalViewport>,
    ) -> Self {
        Self::from_container(options.mode, create_container(options, element, window))
    }

    pub fn from_container(mode: ViewportMode, container: Rc<dyn ContainerRef>) -> Self {
        Self {
            mode,
            container,
            closed: Cell::new(false),
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn container(&self) -> &Rc<dyn ContainerRef> {
        &self.container
    }

    /// True once the host is closed or the strategy was disposed through the deref.
    pub fn is_closed(&self) -> bool {
        self.closed.get() || self.container.is_disposed()
    }

    pub fn metrics(&self, orientation: Orientation) -> ViewportMetrics {
        measure_metrics(&*self.container, orientation)
    }

    /// Re-measures on every scroll event and hands the result to `on_metrics`.
    ///
    /// The subscription ends when it is dropped or the host is closed.
    pub fn watch(
        &self,
        orientation: Orientation,
        on_metrics: impl Fn(ViewportMetrics) + 'static,
    ) -> Subscription {
        let container = Rc::clone(&self.container);
        self.container
            .element_scrolled()
            .subscribe(move |_: &ScrollEvent| {
                let metrics = measure_metrics(&*container, orientation);
                vtrace!(
                    scroll_offset = metrics.scroll_offset,
                    container_size = metrics.container_size,
                    "ViewportHost::watch"
                );
                on_metrics(metrics);
            })
    }

    /// Disposes the strategy. Later calls (including the one from `Drop`) do nothing.
    ///
    /// Prefer this over calling `dispose` through the deref.
    pub fn close(&self) {
        if self.closed.replace(true) || self.container.is_disposed() {
            return;
        }
        vdebug!(mode = self.mode.marker(), "ViewportHost::close");
        self.container.dispose();
    }
}

/// Exposes the whole [`ContainerRef`] contract, `dispose` included. A strategy disposed this
/// way is not disposed again by [`ViewportHost::close`].
impl Deref for ViewportHost {
    type Target = dyn ContainerRef;

    fn deref(&self) -> &Self::Target {
        &*self.container
    }
}

impl Drop for ViewportHost {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for ViewportHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportHost")
            .field("mode", &self.mode)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
