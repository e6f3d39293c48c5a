use core::fmt;

/// Which surface scrolls a virtual-scroll viewport, as declared on the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewportMode {
    /// The viewport element scrolls itself.
    #[default]
    Default,
    /// An ancestor (the viewport's offset parent) scrolls.
    Nested,
    /// The top-level window scrolls.
    Window,
}

impl ViewportMode {
    pub const ALL: [Self; 3] = [Self::Default, Self::Nested, Self::Window];

    /// Parses a declaration marker (`"default"`, `"nested"` or `"window"`).
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.marker() == marker)
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Nested => "nested",
            Self::Window => "window",
        }
    }

    /// Host class name conventionally applied to the viewport element for this mode.
    pub fn host_class(self) -> &'static str {
        match self {
            Self::Default => "virtual-scroll-default-viewport",
            Self::Nested => "virtual-scroll-nested-viewport",
            Self::Window => "virtual-scroll-window-viewport",
        }
    }
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}
