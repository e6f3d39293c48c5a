use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An edge of the scrollable viewport that a scroll offset is measured from.
///
/// `Start` and `End` are logical edges: they map to `Left`/`Right` depending on the text
/// direction of the scrolling surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Left,
    Right,
    Bottom,
    Start,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Instant,
    Smooth,
}

/// Scroll-to request that accepts physical (`left`/`right`/`top`/`bottom`) and logical
/// (`start`/`end`) targets.
///
/// Unset fields are left alone by the receiving surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub behavior: ScrollBehavior,
}

impl ScrollToOptions {
    pub fn top(top: f64) -> Self {
        Self {
            top: Some(top),
            ..Self::default()
        }
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: f64) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

/// A rectangle in window (client) coordinates, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// A CSS pixel length. Formats as `"{n}px"`, e.g. `Px(500.0)` -> `500px`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollSource {
    Element,
    Window,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub source: ScrollSource,
    /// Host timestamp of the event, in milliseconds.
    pub time_stamp: f64,
}

/// Handle returned by a host when a scroll listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);
