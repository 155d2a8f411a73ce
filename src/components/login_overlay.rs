//! Prompt covering the calendar until the visitor signs in.

use leptos::prelude::*;

use crate::state::dialog::DialogKind;
use crate::state::session::SessionGate;

#[component]
pub fn LoginOverlay(gate: StoredValue<SessionGate, LocalStorage>, visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div id="login-overlay" class="login-overlay" class:hidden=move || !visible.get()>
            <div class="login-overlay__card">
                <h2>"Sign in to book"</h2>
                <p>"Log in or create an account to see available slots."</p>
                <div class="login-overlay__actions">
                    <button
                        class="btn-primary"
                        on:click=move |_| gate.with_value(|g| g.dialogs().open(DialogKind::Login))
                    >
                        "Log in"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| gate.with_value(|g| g.dialogs().open(DialogKind::Register))
                    >
                        "Register"
                    </button>
                </div>
            </div>
        </div>
    }
}
