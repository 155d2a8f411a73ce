//! Ephemeral toast notifications.
//!
//! DESIGN
//! ======
//! At most one toast exists. Pushing a new one replaces the current toast
//! outright, and every later transition carries the toast id so timers left
//! over from a superseded toast are ignored.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::rc::Rc;

use futures::FutureExt;

use crate::config::ToastTimings;
use crate::util::runtime::Runtime;
use crate::util::view::Slot;

/// User-visible notification channel.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Animation phase of the current toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted but not yet showing (enter transition pending).
    #[default]
    Entering,
    Shown,
    /// Exit transition running; removed afterwards.
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub phase: ToastPhase,
}

/// Toast slot state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub next_id: u64,
    pub current: Option<Toast>,
}

impl ToastState {
    /// Replace any current toast with `message` and return its id.
    pub fn push(&mut self, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Toast { id, message: message.to_owned(), phase: ToastPhase::Entering });
        id
    }

    /// Move toast `id` to `phase`. Returns `false` if `id` is no longer current.
    pub fn advance(&mut self, id: u64, phase: ToastPhase) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id => {
                toast.phase = phase;
                true
            }
            _ => false,
        }
    }

    /// Drop toast `id` if it is still current.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.as_ref().is_some_and(|t| t.phase == ToastPhase::Shown)
    }
}

/// `Notifier` that drives a `ToastState` slot through its timed lifecycle.
#[derive(Clone)]
pub struct Toaster {
    state: Rc<dyn Slot<ToastState>>,
    runtime: Rc<dyn Runtime>,
    timings: ToastTimings,
}

impl Toaster {
    pub fn new(state: Rc<dyn Slot<ToastState>>, runtime: Rc<dyn Runtime>, timings: ToastTimings) -> Self {
        Self { state, runtime, timings }
    }

    fn update<R>(&self, f: impl FnOnce(&mut ToastState) -> R) -> R {
        let mut next = self.state.get();
        let out = f(&mut next);
        self.state.set(next);
        out
    }
}

impl Notifier for Toaster {
    fn notify(&self, message: &str) {
        let id = self.update(|s| s.push(message));
        let this = self.clone();
        let runtime = self.runtime.clone();
        self.runtime.spawn(
            async move {
                runtime.sleep(this.timings.enter).await;
                if !this.update(|s| s.advance(id, ToastPhase::Shown)) {
                    return;
                }
                runtime.sleep(this.timings.visible).await;
                if !this.update(|s| s.advance(id, ToastPhase::Leaving)) {
                    return;
                }
                runtime.sleep(this.timings.exit).await;
                this.update(|s| s.dismiss(id));
            }
            .boxed_local(),
        );
    }
}
