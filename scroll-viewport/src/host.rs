//! Capabilities a host environment provides to the viewport strategies.
//!
//! Nothing in this crate touches a real DOM. A browser binding implements these traits over
//! `web_sys` nodes, a native toolkit over its layout tree, and tests use [`crate::memory`].

use alloc::rc::Rc;
use core::cell::Cell;

use crate::{ClientRect, Direction, ListenerId, ScrollBehavior, ScrollEvent, ScrollToOptions};

/// A scroll listener attached to a host surface.
pub type ScrollListener = Rc<dyn Fn(&ScrollEvent)>;

/// Layout geometry and scroll control of a single element.
///
/// All measurements are fresh reads. Implementations must not cache values across reflows.
pub trait Element {
    fn client_width(&self) -> f64;
    fn client_height(&self) -> f64;
    fn scroll_width(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn scroll_top(&self) -> f64;
    fn scroll_left(&self) -> f64;

    /// Distance from the top of the offset parent's padding box to this element.
    fn offset_top(&self) -> f64;

    /// The nearest positioned ancestor, or `None` for detached/fixed elements.
    fn offset_parent(&self) -> Option<Rc<dyn Element>>;

    fn bounding_client_rect(&self) -> ClientRect;

    /// Moves the scroll position. `None` leaves that axis untouched.
    fn scroll_to(&self, top: Option<f64>, left: Option<f64>, behavior: ScrollBehavior);

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId;
    fn remove_scroll_listener(&self, id: ListenerId);
}

/// The top-level browsing context (the `window`).
pub trait GlobalViewport {
    fn inner_width(&self) -> f64;
    fn inner_height(&self) -> f64;
    fn scroll_to(&self, options: &ScrollToOptions);

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId;
    fn remove_scroll_listener(&self, id: ListenerId);
}

/// Resolves the text direction of a scrolling surface.
pub trait Directionality {
    fn value(&self) -> Direction;
}

impl Directionality for Direction {
    fn value(&self) -> Direction {
        *self
    }
}

/// A direction that can be flipped at runtime (e.g. bound to a `dir` attribute).
impl Directionality for Cell<Direction> {
    fn value(&self) -> Direction {
        self.get()
    }
}

/// How a host reports `scroll_left` for right-to-left content.
///
/// Engines disagree here, so the host declares which convention it follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RtlScrollAxisType {
    /// `scroll_left` is 0 at the far left and grows to the right, as in LTR.
    #[default]
    Normal,
    /// `scroll_left` is 0 at the far right and grows to the left.
    Inverted,
    /// `scroll_left` is 0 at the far right and becomes negative to the left.
    Negated,
}
