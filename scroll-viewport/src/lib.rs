//! Viewport strategies for virtual scrolling.
//!
//! For mode-keyed composition and lifecycle ownership, see the `scroll-viewport-adapter` crate.
//!
//! A virtual-scroll engine needs two numbers every frame (how far the list is scrolled and how
//! large the visible area is) plus a stream of scroll notifications. Where those come from
//! depends on what actually scrolls:
//!
//! - [`DefaultViewport`]: the list element is its own scroll container.
//! - [`NestedViewport`]: an ancestor (the element's offset parent) scrolls; offsets are
//!   corrected for the list's position inside it.
//! - [`WindowViewport`]: the top-level window scrolls; offsets come from the element's client
//!   rect.
//!
//! All three implement [`ContainerRef`], so the engine never branches on which one is active.
//!
//! The crate is host-agnostic. A DOM binding, GUI toolkit or TUI layer provides geometry
//! through the [`Element`] and [`GlobalViewport`] traits; [`memory`] has in-memory versions.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod default_viewport;
mod element_ref;
mod host;
pub mod memory;
mod nested_viewport;
mod scrollable;
mod state;
mod stream;
mod types;
mod window_viewport;


pub use container::ContainerRef;
pub use default_viewport::DefaultViewport;
pub use element_ref::{ElementRef, RelativeParentElementRef};
pub use host::{Directionality, Element, GlobalViewport, RtlScrollAxisType, ScrollListener};
pub use nested_viewport::NestedViewport;
pub use scrollable::Scrollable;
pub use state::{ViewportMetrics, measure_metrics};
pub use stream::{DisposeSignal, ScrollEvents, ScrollObserver, ScrollSubject, Subscription};
pub use types::{
    ClientRect, Direction, Edge, ListenerId, Orientation, Px, ScrollBehavior, ScrollEvent,
    ScrollSource, ScrollToOptions,
};
pub use window_viewport::WindowViewport;
