// Example: a list scrolled by the window, driven by simulated window scroll events.
use std::rc::Rc;

use scroll_viewport::memory::{MemoryElement, MemoryWindow};
use scroll_viewport::{
    ClientRect, ContainerRef, Edge, Element, Orientation, ScrollEvent, WindowViewport,
};

fn main() {
    let window = Rc::new(MemoryWindow::new(1280.0, 720.0));
    let list = Rc::new(MemoryElement::new().with_bounding_client_rect(ClientRect {
        top: 200.0,
        left: 0.0,
        width: 1280.0,
        height: 50_000.0,
    }));

    let viewport = WindowViewport::new(list.clone(), window.clone());
    println!(
        "container={}x{} viewport_size={:?}",
        viewport.measure_container_size(Orientation::Horizontal),
        viewport.measure_container_size(Orientation::Vertical),
        viewport.viewport_size(50_000.0).map(|px| px.to_string()),
    );

    let _sub = viewport.element_scrolled().subscribe({
        let list = list.clone();
        move |event: &ScrollEvent| {
            let top = list.bounding_client_rect().top;
            println!("window scrolled t={} list.top={top}", event.time_stamp);
        }
    });

    // Simulate the page scrolling: the list's client rect moves up.
    for y in [100.0, 400.0, 1_000.0] {
        list.set_bounding_client_rect(ClientRect {
            top: 200.0 - y,
            ..list.bounding_client_rect()
        });
        window.dispatch_scroll();
        println!("top offset={}", viewport.measure_scroll_offset(Edge::Top));
    }

    viewport.dispose();
    viewport.dispose();
    window.dispatch_scroll();
    println!("window listeners after dispose={}", window.listener_count());
}
