// Example: a list nested inside a scrolling panel, below a 120px header.
use std::rc::Rc;

use scroll_viewport::memory::MemoryElement;
use scroll_viewport::{
    ContainerRef, Edge, Element, NestedViewport, Orientation, ScrollEvent, ScrollToOptions,
    measure_metrics,
};

fn main() {
    let panel = Rc::new(
        MemoryElement::new()
            .with_client_size(360.0, 600.0)
            .with_scroll_size(360.0, 20_120.0),
    );
    let list = Rc::new(
        MemoryElement::new()
            .with_client_size(360.0, 20_000.0)
            .with_offset_top(120.0)
            .with_offset_parent(panel.clone()),
    );

    let viewport = NestedViewport::new(list.clone());
    println!(
        "viewport_size={:?}",
        viewport.viewport_size(20_000.0).map(|px| px.to_string())
    );

    let _sub = viewport.element_scrolled().subscribe({
        let panel = panel.clone();
        move |event: &ScrollEvent| {
            println!("scrolled t={} panel.scroll_top={}", event.time_stamp, panel.scroll_top());
        }
    });

    // Header still visible: the list has not reached the top of the panel yet.
    panel.scroll_by_user(80.0, 0.0);
    println!("top offset={}", viewport.measure_scroll_offset(Edge::Top));

    viewport.scroll_to(ScrollToOptions::top(2_120.0));
    println!("metrics={:?}", measure_metrics(&viewport, Orientation::Vertical));

    viewport.dispose();
    panel.scroll_by_user(0.0, 0.0);
    println!("listeners after dispose={}", panel.listener_count());
}
