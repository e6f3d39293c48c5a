use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::Element;

/// A handle that resolves to the element a [`crate::Scrollable`] measures and listens on.
pub trait ElementRef {
    /// Resolves the element. Called on every measurement; implementations must not cache.
    fn native_element(&self) -> Option<Rc<dyn Element>>;
}

impl ElementRef for Rc<dyn Element> {
    fn native_element(&self) -> Option<Rc<dyn Element>> {
        Some(Rc::clone(self))
    }
}

/// Resolves to the *current* offset parent of the wrapped viewport element.
///
/// The offset parent changes across reflows (repositioning, reparenting), so it is looked up
/// on every read. A missing parent is warned about once per detachment, not once per read.
#[derive(Clone)]
pub struct RelativeParentElementRef {
    element: Rc<dyn Element>,
    // Shared between clones: a nested viewport hands clones to its streams.
    warned: Rc<Cell<bool>>,
}

impl RelativeParentElementRef {
    pub fn new(element: Rc<dyn Element>) -> Self {
        Self {
            element,
            warned: Rc::new(Cell::new(false)),
        }
    }

    /// The wrapped viewport element (not its offset parent).
    pub fn viewport_element(&self) -> &Rc<dyn Element> {
        &self.element
    }
}

impl ElementRef for RelativeParentElementRef {
    fn native_element(&self) -> Option<Rc<dyn Element>> {
        let parent = self.element.offset_parent();
        if parent.is_some() {
            self.warned.set(false);
        } else if !self.warned.replace(true) {
            vwarn!("RelativeParentElementRef: viewport element has no offset parent");
        }
        parent
    }
}

#[cfg(test)]
impl RelativeParentElementRef {
    pub(crate) fn warned_detached(&self) -> bool {
        self.warned.get()
    }
}

impl fmt::Debug for RelativeParentElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeParentElementRef").finish_non_exhaustive()
    }
}
