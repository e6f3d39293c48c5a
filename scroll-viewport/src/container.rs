use crate::{Edge, Orientation, Px, ScrollEvents, ScrollToOptions};

/// The contract a virtual-scroll rendering engine drives its viewport through.
///
/// The engine holds a `dyn ContainerRef` and never needs to know whether the list scrolls
/// itself ([`crate::DefaultViewport`]), is scrolled by an ancestor ([`crate::NestedViewport`]),
/// or by the window ([`crate::WindowViewport`]).
pub trait ContainerRef {
    /// Distance in pixels from `from` to the current scroll position. No side effects.
    fn measure_scroll_offset(&self, from: Edge) -> f64;

    /// Size of the physical viewport (not the content) along `orientation`. No side effects.
    fn measure_container_size(&self, orientation: Orientation) -> f64;

    /// The size the engine should force onto its content-sizing element.
    ///
    /// `None` means the container constrains its own size and the engine must not override it.
    fn viewport_size(&self, content_size: f64) -> Option<Px>;

    /// Fires every time the surface that actually scrolls is scrolled.
    ///
    /// The stream is lazy and ends on [`ContainerRef::dispose`].
    fn element_scrolled(&self) -> ScrollEvents;

    /// Moves the scroll position of the surface that actually scrolls.
    fn scroll_to(&self, options: ScrollToOptions);

    /// Releases event subscriptions. Must be safe to call more than once.
    fn dispose(&self);

    /// Whether [`ContainerRef::dispose`] has run.
    fn is_disposed(&self) -> bool;
}
