use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::{
    Direction, Directionality, DisposeSignal, Edge, Element, ElementRef, ListenerId,
    RtlScrollAxisType, ScrollEvent, ScrollEvents, ScrollListener, ScrollObserver, ScrollToOptions,
    Subscription,
};

/// Generic scrollable capability over an [`ElementRef`].
///
/// Measurements and scroll requests go to whatever element the ref resolves to *at call
/// time*, which is what lets [`crate::NestedViewport`] redirect everything to an ancestor.
pub struct Scrollable<R> {
    element_ref: R,
    dir: Option<Rc<dyn Directionality>>,
    rtl_scroll_axis_type: RtlScrollAxisType,
    destroyed: DisposeSignal,
}

impl<R: ElementRef + Clone + 'static> Scrollable<R> {
    pub fn new(element_ref: R) -> Self {
        Self {
            element_ref,
            dir: None,
            rtl_scroll_axis_type: RtlScrollAxisType::default(),
            destroyed: DisposeSignal::new(),
        }
    }

    pub fn with_directionality(mut self, dir: Option<Rc<dyn Directionality>>) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_rtl_scroll_axis_type(mut self, axis_type: RtlScrollAxisType) -> Self {
        self.rtl_scroll_axis_type = axis_type;
        self
    }

    pub fn element_ref(&self) -> &R {
        &self.element_ref
    }

    pub fn is_rtl(&self) -> bool {
        self.dir.as_ref().is_some_and(|d| d.value() == Direction::Rtl)
    }

    /// Distance from `from` to the current scroll position of the resolved element.
    ///
    /// Returns `0.0` when the ref resolves to no element.
    pub fn measure_scroll_offset(&self, from: Edge) -> f64 {
        let Some(el) = self.element_ref.native_element() else {
            return 0.0;
        };
        let rtl = self.is_rtl();
        match from {
            Edge::Top => el.scroll_top(),
            Edge::Bottom => el.scroll_height() - el.client_height() - el.scroll_top(),
            Edge::Left => self.horizontal_offset(&*el, true, rtl),
            Edge::Right => self.horizontal_offset(&*el, false, rtl),
            Edge::Start => self.horizontal_offset(&*el, !rtl, rtl),
            Edge::End => self.horizontal_offset(&*el, rtl, rtl),
        }
    }

    fn horizontal_offset(&self, el: &dyn Element, from_left: bool, rtl: bool) -> f64 {
        let max_left = el.scroll_width() - el.client_width();
        let axis_type = if rtl {
            self.rtl_scroll_axis_type
        } else {
            RtlScrollAxisType::Normal
        };
        match (axis_type, from_left) {
            (RtlScrollAxisType::Normal, true) => el.scroll_left(),
            (RtlScrollAxisType::Normal, false) => max_left - el.scroll_left(),
            (RtlScrollAxisType::Inverted, true) => max_left - el.scroll_left(),
            (RtlScrollAxisType::Inverted, false) => el.scroll_left(),
            (RtlScrollAxisType::Negated, true) => el.scroll_left() + max_left,
            (RtlScrollAxisType::Negated, false) => -el.scroll_left(),
        }
    }

    /// Normalizes logical and far-edge targets into `top`/`left`, then scrolls the resolved
    /// element.
    pub fn scroll_to(&self, mut options: ScrollToOptions) {
        let Some(el) = self.element_ref.native_element() else {
            return;
        };
        let rtl = self.is_rtl();

        if options.left.is_none() {
            options.left = if rtl { options.end } else { options.start };
        }
        if options.right.is_none() {
            options.right = if rtl { options.start } else { options.end };
        }
        if let Some(bottom) = options.bottom {
            options.top = Some(el.scroll_height() - el.client_height() - bottom);
        }

        let max_left = el.scroll_width() - el.client_width();
        if rtl && self.rtl_scroll_axis_type != RtlScrollAxisType::Normal {
            if let Some(left) = options.left {
                options.right = Some(max_left - left);
            }
            options.left = match self.rtl_scroll_axis_type {
                RtlScrollAxisType::Negated => options.right.map(|right| -right),
                _ => options.right,
            };
        } else if let Some(right) = options.right {
            options.left = Some(max_left - right);
        }

        vtrace!(
            top = ?options.top,
            left = ?options.left,
            "Scrollable::scroll_to"
        );
        el.scroll_to(options.top, options.left, options.behavior);
    }

    /// Scroll events of the element resolved at subscribe time.
    ///
    /// Streams end when the scrollable is disposed.
    pub fn element_scrolled(&self) -> ScrollEvents {
        let element_ref = self.element_ref.clone();
        let destroyed = self.destroyed.clone();
        ScrollEvents::new(move |observer| subscribe_element(&element_ref, &destroyed, observer))
    }

    pub fn is_disposed(&self) -> bool {
        self.destroyed.is_disposed()
    }

    /// Completes every live `element_scrolled` subscription. Safe to call more than once.
    /// Dropping the scrollable does the same.
    pub fn dispose(&self) {
        if self.destroyed.dispose() {
            vdebug!("Scrollable::dispose");
        }
    }
}

impl<R> Drop for Scrollable<R> {
    fn drop(&mut self) {
        if self.destroyed.dispose() {
            vdebug!("Scrollable::drop");
        }
    }
}

type Attached = Rc<Cell<Option<(Rc<dyn Element>, ListenerId)>>>;

fn detach(attached: &Attached) {
    if let Some((el, id)) = attached.take() {
        el.remove_scroll_listener(id);
    }
}

fn subscribe_element<R: ElementRef>(
    element_ref: &R,
    destroyed: &DisposeSignal,
    observer: Rc<dyn ScrollObserver>,
) -> Subscription {
    if destroyed.is_disposed() {
        observer.complete();
        return Subscription::completed();
    }

    let closed = Rc::new(Cell::new(false));
    let attached: Attached = Rc::new(Cell::new(None));
    if let Some(el) = element_ref.native_element() {
        let listener: ScrollListener = {
            let observer = Rc::clone(&observer);
            let closed = Rc::clone(&closed);
            Rc::new(move |event: &ScrollEvent| {
                if !closed.get() {
                    observer.next(event);
                }
            })
        };
        let id = el.add_scroll_listener(listener);
        attached.set(Some((el, id)));
    }

    let hook = destroyed.on_dispose({
        let closed = Rc::clone(&closed);
        let attached = Rc::clone(&attached);
        move || {
            closed.set(true);
            detach(&attached);
            observer.complete();
        }
    });

    let destroyed = destroyed.clone();
    Subscription::new(Rc::clone(&closed), move || {
        closed.set(true);
        detach(&attached);
        if let Some(hook) = hook {
            destroyed.cancel(hook);
        }
    })
}

impl<R: fmt::Debug> fmt::Debug for Scrollable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollable")
            .field("element_ref", &self.element_ref)
            .field("dir", &self.dir.as_ref().map(|d| d.value()))
            .field("rtl_scroll_axis_type", &self.rtl_scroll_axis_type)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
