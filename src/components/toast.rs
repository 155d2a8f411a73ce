//! Toast host rendering the single current notification.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ToastTimings;
use crate::state::toast::{ToastPhase, ToastState, Toaster};
use crate::util::runtime::BrowserRuntime;

/// Notifier bound to the app-wide toast signal.
pub fn toaster(toasts: RwSignal<ToastState>) -> Toaster {
    Toaster::new(Rc::new(toasts), Rc::new(BrowserRuntime), ToastTimings::default())
}

/// Renders the current toast, if any. `show` drives the CSS enter/exit transition.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        {move || {
            toasts
                .get()
                .current
                .map(|toast| {
                    let shown = toast.phase == ToastPhase::Shown;
                    view! {
                        <div class="notification" class:show=shown role="status">
                            {toast.message}
                        </div>
                    }
                })
        }}
    }
}
