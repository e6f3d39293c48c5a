// Example: one list declaration, three scrolling modes.
use std::rc::Rc;

use scroll_viewport::memory::{MemoryElement, MemoryWindow};
use scroll_viewport::{ClientRect, Orientation};
use scroll_viewport_adapter::{ViewportHost, ViewportMode, ViewportOptions};

fn main() {
    let panel = Rc::new(
        MemoryElement::new()
            .with_client_size(400.0, 300.0)
            .with_scroll_size(400.0, 10_000.0),
    );
    let list = Rc::new(
        MemoryElement::new()
            .with_client_size(400.0, 300.0)
            .with_scroll_size(400.0, 9_000.0)
            .with_offset_top(40.0)
            .with_offset_parent(panel.clone())
            .with_bounding_client_rect(ClientRect {
                top: -500.0,
                left: 0.0,
                width: 400.0,
                height: 9_000.0,
            }),
    );
    let window = Rc::new(MemoryWindow::new(1024.0, 768.0));
    panel.set_scroll_position(640.0, 0.0);
    list.set_scroll_position(120.0, 0.0);

    for marker in ["default", "nested", "window"] {
        let Some(mode) = ViewportMode::from_marker(marker) else {
            continue;
        };
        let host = ViewportHost::new(&ViewportOptions::new(mode), list.clone(), window.clone());
        println!(
            "{mode}: metrics={:?} viewport_size={:?}",
            host.metrics(Orientation::Vertical),
            host.viewport_size(9_000.0).map(|px| px.to_string()),
        );
    }
    println!("window listeners after hosts dropped={}", window.listener_count());
}
