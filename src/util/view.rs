//! View port: writable state slots and optional page element handles.
//!
//! DESIGN
//! ======
//! Controllers write UI state through `Slot`s. In the app a slot is a Leptos
//! `RwSignal`, so writes re-render the bound elements; in tests it is a plain
//! `RefCell`. An element the page does not render is a `None` handle, and
//! writes to it are skipped.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{GetUntracked, RwSignal, Set};

/// Readable and writable piece of UI state.
pub trait Slot<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);
}

impl<T: Clone> Slot<T> for RefCell<T> {
    fn get(&self) -> T {
        self.borrow().clone()
    }

    fn set(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T: Clone + Send + Sync + 'static> Slot<T> for RwSignal<T> {
    fn get(&self) -> T {
        self.get_untracked()
    }

    fn set(&self, value: T) {
        Set::set(self, value);
    }
}

/// Visibility of one page element.
pub type ElementHandle = Rc<dyn Slot<bool>>;

/// Elements of the booking page the session gate toggles.
#[derive(Clone, Default)]
pub struct GateView {
    /// Blocking prompt shown to signed-out visitors.
    pub overlay: Option<ElementHandle>,
    /// Placeholder shown while the calendar "loads".
    pub loading: Option<ElementHandle>,
    /// Embedded calendar frame.
    pub content: Option<ElementHandle>,
}

/// Write `visible` to `handle` when the element exists.
pub fn set_visible(handle: Option<&ElementHandle>, visible: bool) {
    if let Some(handle) = handle {
        handle.set(visible);
    }
}
