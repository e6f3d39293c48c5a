use crate::{ContainerRef, Edge, Orientation};

/// A lightweight, serializable snapshot of a container's scroll geometry along one axis.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    pub orientation: Orientation,
    /// Offset from the leading edge (`Top` for vertical, `Start` for horizontal).
    pub scroll_offset: f64,
    pub container_size: f64,
}

impl ViewportMetrics {
    /// The far end of the visible window, in the same coordinates as `scroll_offset`.
    pub fn scroll_end(&self) -> f64 {
        self.scroll_offset + self.container_size
    }
}

/// Captures the scroll offset and container size an engine needs for one layout pass.
pub fn measure_metrics(container: &dyn ContainerRef, orientation: Orientation) -> ViewportMetrics {
    let edge = match orientation {
        Orientation::Horizontal => Edge::Start,
        Orientation::Vertical => Edge::Top,
    };
    let metrics = ViewportMetrics {
        orientation,
        scroll_offset: container.measure_scroll_offset(edge),
        container_size: container.measure_container_size(orientation),
    };
    vtrace!(
        scroll_offset = metrics.scroll_offset,
        container_size = metrics.container_size,
        "measure_metrics"
    );
    metrics
}
