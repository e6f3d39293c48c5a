use alloc::rc::Rc;

use scroll_viewport::{
    ContainerRef, DefaultViewport, Directionality, Element, GlobalViewport, NestedViewport,
    WindowViewport,
};

use crate::{ViewportMode, ViewportOptions};

/// Builds the viewport strategy declared by `options.mode`.
///
/// `window` is only consulted for [`ViewportMode::Window`].
pub fn create_container(
    options: &ViewportOptions,
    element: Rc<dyn Element>,
    window: Rc<dyn GlobalViewport>,
) -> Rc<dyn ContainerRef> {
    let dir = options
        .direction
        .map(|direction| Rc::new(direction) as Rc<dyn Directionality>);
    vdebug!(mode = options.mode.marker(), "create_container");

    match options.mode {
        ViewportMode::Default => Rc::new(
            DefaultViewport::new(element)
                .with_directionality(dir)
                .with_rtl_scroll_axis_type(options.rtl_scroll_axis_type),
        ),
        ViewportMode::Nested => Rc::new(
            NestedViewport::new(element)
                .with_directionality(dir)
                .with_rtl_scroll_axis_type(options.rtl_scroll_axis_type),
        ),
        ViewportMode::Window => {
            Rc::new(WindowViewport::new(element, window).with_directionality(dir))
        }
    }
}
