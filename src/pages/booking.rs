//! Booking page: calendar gated behind the simulated login.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `SessionGate` for its lifetime. The gate writes the
//! overlay/loading/calendar visibility signals rendered below, and
//! `initialize` runs once on the client after hydration so the server always
//! renders the signed-out view.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::auth_dialogs::{LoginDialog, RegisterDialog};
use crate::components::booking_calendar::BookingCalendar;
use crate::components::login_overlay::LoginOverlay;
use crate::components::toast::toaster;
use crate::config::GateTimings;
use crate::state::dialog::{DialogController, DialogKind};
use crate::state::session::SessionGate;
use crate::state::toast::ToastState;
use crate::util::runtime::{BrowserRuntime, Runtime};
use crate::util::storage::BrowserStorage;
use crate::util::view::{ElementHandle, GateView};

struct GateSignals {
    overlay: RwSignal<bool>,
    loading: RwSignal<bool>,
    content: RwSignal<bool>,
    dialog: RwSignal<Option<DialogKind>>,
    toasts: RwSignal<ToastState>,
}

fn handle(signal: RwSignal<bool>) -> Option<ElementHandle> {
    let handle: ElementHandle = Rc::new(signal);
    Some(handle)
}

fn build_gate(signals: &GateSignals) -> SessionGate {
    let runtime: Rc<dyn Runtime> = Rc::new(BrowserRuntime);
    let timings = GateTimings::default();
    let dialogs = DialogController::new(Rc::new(signals.dialog), runtime.clone(), timings.dialog_switch_delay);
    let view = GateView {
        overlay: handle(signals.overlay),
        loading: handle(signals.loading),
        content: handle(signals.content),
    };
    SessionGate::new(
        Rc::new(BrowserStorage),
        view,
        Rc::new(toaster(signals.toasts)),
        dialogs,
        runtime,
        timings,
    )
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let signals = GateSignals {
        overlay: RwSignal::new(true),
        loading: RwSignal::new(true),
        content: RwSignal::new(false),
        dialog: RwSignal::new(None),
        toasts: expect_context::<RwSignal<ToastState>>(),
    };
    let gate = StoredValue::new_local(build_gate(&signals));

    Effect::new(move || gate.with_value(SessionGate::initialize));

    view! {
        <main class="booking-page">
            <header class="booking-header">
                <h1>"Book a visit"</h1>
                <p>"Pick a free slot in the calendar below."</p>
            </header>
            <section class="booking-calendar">
                <BookingCalendar loading=signals.loading content=signals.content/>
                <LoginOverlay gate=gate visible=signals.overlay/>
            </section>
            <LoginDialog gate=gate open=signals.dialog/>
            <RegisterDialog gate=gate open=signals.dialog/>
        </main>
    }
}
