//! Login/register modal dialogs.
//!
//! At most one dialog is open. `None` is both the initial state and reachable
//! from every other state.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;

use crate::util::runtime::Runtime;
use crate::util::view::Slot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Login,
    Register,
}

/// Where a pointer interaction inside a dialog landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogClickTarget {
    /// The dimmed region around the dialog box.
    Backdrop,
    /// The dialog box itself.
    Content,
}

/// Owns which dialog, if any, is open.
#[derive(Clone)]
pub struct DialogController {
    open: Rc<dyn Slot<Option<DialogKind>>>,
    runtime: Rc<dyn Runtime>,
    switch_delay: Duration,
}

impl DialogController {
    pub fn new(open: Rc<dyn Slot<Option<DialogKind>>>, runtime: Rc<dyn Runtime>, switch_delay: Duration) -> Self {
        Self { open, runtime, switch_delay }
    }

    pub fn current(&self) -> Option<DialogKind> {
        self.open.get()
    }

    pub fn is_open(&self, kind: DialogKind) -> bool {
        self.current() == Some(kind)
    }

    pub fn open(&self, kind: DialogKind) {
        self.open.set(Some(kind));
    }

    pub fn close_all(&self) {
        self.open.set(None);
    }

    /// Close everything now and open `kind` once the close transition is done.
    pub fn switch_to(&self, kind: DialogKind) {
        self.close_all();
        let this = self.clone();
        self.runtime.spawn(
            async move {
                this.runtime.sleep(this.switch_delay).await;
                this.open(kind);
            }
            .boxed_local(),
        );
    }

    pub fn on_click(&self, target: DialogClickTarget) {
        if target == DialogClickTarget::Backdrop {
            self.close_all();
        }
    }
}
