use crate::*;

use alloc::rc::Rc;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use scroll_viewport::memory::{MemoryElement, MemoryWindow};
use scroll_viewport::{
    ClientRect, ContainerRef, Direction, Edge, Element, Orientation, Px, RtlScrollAxisType,
    ScrollEvents, ScrollToOptions, ViewportMetrics,
};

struct Page {
    parent: Rc<MemoryElement>,
    element: Rc<MemoryElement>,
    window: Rc<MemoryWindow>,
}

fn page() -> Page {
    let parent = Rc::new(
        MemoryElement::new()
            .with_client_size(300.0, 400.0)
            .with_scroll_size(300.0, 4000.0),
    );
    let element = Rc::new(
        MemoryElement::new()
            .with_client_size(300.0, 3000.0)
            .with_scroll_size(300.0, 3000.0)
            .with_offset_top(25.0)
            .with_offset_parent(parent.clone())
            .with_bounding_client_rect(ClientRect {
                top: -50.0,
                left: 0.0,
                width: 300.0,
                height: 3000.0,
            }),
    );
    let window = Rc::new(MemoryWindow::new(1024.0, 768.0));
    Page {
        parent,
        element,
        window,
    }
}

impl Page {
    fn host(&self, options: &ViewportOptions) -> ViewportHost {
        ViewportHost::new(options, self.element.clone(), self.window.clone())
    }
}

#[derive(Default)]
struct CountingContainer {
    disposals: Cell<usize>,
}

impl ContainerRef for CountingContainer {
    fn measure_scroll_offset(&self, _from: Edge) -> f64 {
        0.0
    }

    fn measure_container_size(&self, _orientation: Orientation) -> f64 {
        0.0
    }

    fn viewport_size(&self, _content_size: f64) -> Option<Px> {
        None
    }

    fn element_scrolled(&self) -> ScrollEvents {
        ScrollEvents::empty()
    }

    fn scroll_to(&self, _options: ScrollToOptions) {}

    fn dispose(&self) {
        self.disposals.set(self.disposals.get() + 1);
    }

    fn is_disposed(&self) -> bool {
        self.disposals.get() > 0
    }
}

#[test]
fn mode_markers_parse_and_display() {
    for mode in ViewportMode::ALL {
        assert_eq!(ViewportMode::from_marker(mode.marker()), Some(mode));
        assert_eq!(mode.to_string(), mode.marker());
    }
    assert_eq!(ViewportMode::from_marker("sticky"), None);
    assert_eq!(ViewportMode::default(), ViewportMode::Default);
    assert_eq!(
        ViewportMode::Nested.host_class(),
        "virtual-scroll-nested-viewport"
    );
}

#[test]
fn factory_selects_strategy_by_declared_mode() {
    let page = page();
    page.parent.set_scroll_position(100.0, 0.0);

    let default = page.host(&ViewportOptions::new(ViewportMode::Default));
    assert_eq!(default.measure_container_size(Orientation::Vertical), 3000.0);
    assert_eq!(default.measure_scroll_offset(Edge::Top), 0.0);
    assert_eq!(default.viewport_size(50.0), None);

    let nested = page.host(&ViewportOptions::new(ViewportMode::Nested));
    assert_eq!(nested.measure_container_size(Orientation::Vertical), 400.0);
    assert_eq!(nested.measure_scroll_offset(Edge::Top), 75.0);
    assert_eq!(nested.viewport_size(50.0), Some(Px(50.0)));

    let window = page.host(&ViewportOptions::new(ViewportMode::Window));
    assert_eq!(window.measure_container_size(Orientation::Vertical), 768.0);
    assert_eq!(window.measure_scroll_offset(Edge::Top), 50.0);
    assert_eq!(window.viewport_size(50.0), Some(Px(50.0)));
    assert_eq!(window.mode(), ViewportMode::Window);
}

#[test]
fn factory_applies_direction_options() {
    let page = page();
    page.element.set_client_size(100.0, 100.0);
    page.element.set_scroll_size(300.0, 100.0);
    page.element.set_scroll_position(0.0, -50.0);

    let ltr = page.host(&ViewportOptions::new(ViewportMode::Default));
    assert_eq!(ltr.measure_scroll_offset(Edge::Start), -50.0);

    let rtl = page.host(
        &ViewportOptions::new(ViewportMode::Default)
            .with_direction(Some(Direction::Rtl))
            .with_rtl_scroll_axis_type(RtlScrollAxisType::Negated),
    );
    assert_eq!(rtl.measure_scroll_offset(Edge::Start), 50.0);
    assert_eq!(rtl.measure_scroll_offset(Edge::End), 150.0);
}

#[test]
fn host_disposes_exactly_once() {
    let container = Rc::new(CountingContainer::default());
    let host = ViewportHost::from_container(ViewportMode::Default, container.clone());

    host.close();
    host.close();
    assert!(host.is_closed());
    assert_eq!(container.disposals.get(), 1);

    drop(host);
    assert_eq!(container.disposals.get(), 1);
}

#[test]
fn host_sees_disposal_through_deref() {
    let container = Rc::new(CountingContainer::default());
    let host = ViewportHost::from_container(ViewportMode::Default, container.clone());

    host.dispose();
    assert!(host.is_closed());

    host.close();
    drop(host);
    assert_eq!(container.disposals.get(), 1);
}

#[test]
fn window_host_disposed_through_deref_reports_closed() {
    let page = page();
    let host = page.host(&ViewportOptions::new(ViewportMode::Window));

    host.dispose();
    assert!(host.is_closed());
    assert_eq!(page.window.listener_count(), 0);
}

#[test]
fn host_drop_disposes() {
    let container = Rc::new(CountingContainer::default());
    {
        let _host = ViewportHost::from_container(ViewportMode::Nested, container.clone());
        assert_eq!(container.disposals.get(), 0);
    }
    assert_eq!(container.disposals.get(), 1);
}

#[test]
fn window_host_releases_window_listener_on_close() {
    let page = page();
    let host = page.host(&ViewportOptions::new(ViewportMode::Window));
    assert_eq!(page.window.listener_count(), 1);

    host.close();
    assert_eq!(page.window.listener_count(), 0);

    drop(host);
    assert_eq!(page.window.listener_count(), 0);
}

#[test]
fn watch_remeasures_on_every_scroll() {
    let page = page();
    let host = page.host(&ViewportOptions::new(ViewportMode::Window));
    let seen: Rc<RefCell<Vec<ViewportMetrics>>> = Rc::new(RefCell::new(Vec::new()));

    let _watch = host.watch(Orientation::Vertical, {
        let seen = Rc::clone(&seen);
        move |metrics| seen.borrow_mut().push(metrics)
    });

    page.window.dispatch_scroll();
    page.element.set_bounding_client_rect(ClientRect {
        top: -260.0,
        ..page.element.bounding_client_rect()
    });
    page.window.dispatch_scroll();

    let offsets: Vec<f64> = seen.borrow().iter().map(|m| m.scroll_offset).collect();
    assert_eq!(offsets, [50.0, 260.0]);
    assert!(seen.borrow().iter().all(|m| m.container_size == 768.0));

    host.close();
    page.window.dispatch_scroll();
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn watch_on_nested_host_tracks_ancestor_scroll() {
    let page = page();
    let host = page.host(&ViewportOptions::new(ViewportMode::Nested));
    let last: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

    let watch = host.watch(Orientation::Vertical, {
        let last = Rc::clone(&last);
        move |metrics| last.set(Some(metrics.scroll_offset))
    });

    page.parent.scroll_by_user(125.0, 0.0);
    assert_eq!(last.get(), Some(100.0));

    host.scroll_to(ScrollToOptions::top(325.0));
    assert_eq!(last.get(), Some(300.0));
    assert_eq!(host.metrics(Orientation::Vertical).container_size, 400.0);

    drop(watch);
    assert_eq!(page.parent.listener_count(), 0);
}
