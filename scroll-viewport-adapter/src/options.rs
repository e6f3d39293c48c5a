use scroll_viewport::{Direction, RtlScrollAxisType};

use crate::ViewportMode;

/// Configuration for [`crate::create_container`] and [`crate::ViewportHost`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportOptions {
    pub mode: ViewportMode,
    /// Text direction of the scrolling surface. `None` behaves as left-to-right.
    pub direction: Option<Direction>,
    /// How the host reports `scroll_left` under right-to-left content.
    pub rtl_scroll_axis_type: RtlScrollAxisType,
}

impl ViewportOptions {
    pub fn new(mode: ViewportMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ViewportMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_direction(mut self, direction: Option<Direction>) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_rtl_scroll_axis_type(mut self, axis_type: RtlScrollAxisType) -> Self {
        self.rtl_scroll_axis_type = axis_type;
        self
    }
}
