//! Login and registration modal dialogs.
//!
//! Both dialogs are always mounted; the `active` class shows the one the
//! dialog controller has open. Clicking the dimmed backdrop closes them.

use leptos::prelude::*;

use crate::state::dialog::{DialogClickTarget, DialogKind};
use crate::state::session::{Credentials, Profile, SessionGate};

/// Login dialog with a link over to registration.
#[component]
pub fn LoginDialog(gate: StoredValue<SessionGate, LocalStorage>, open: RwSignal<Option<DialogKind>>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials { email: email.get_untracked(), password: password.get_untracked() };
        gate.with_value(|g| g.submit_login(credentials));
    };

    view! {
        <div
            id="login-modal"
            class="modal"
            class:active=move || open.get() == Some(DialogKind::Login)
            on:click=move |_| gate.with_value(|g| g.dialogs().on_click(DialogClickTarget::Backdrop))
        >
            <div
                class="modal-content"
                on:click=move |ev| {
                    ev.stop_propagation();
                    gate.with_value(|g| g.dialogs().on_click(DialogClickTarget::Content));
                }
            >
                <button
                    class="modal-close"
                    title="Close"
                    on:click=move |_| gate.with_value(|g| g.dialogs().close_all())
                >
                    "✕"
                </button>
                <h2>"Log in"</h2>
                <form on:submit=on_submit>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="you@example.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="login-password"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary">"Log in"</button>
                </form>
                <p class="modal-switch">
                    "No account yet? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        gate.with_value(|g| g.dialogs().switch_to(DialogKind::Register));
                    }>
                        "Register"
                    </a>
                </p>
            </div>
        </div>
    }
}

/// Registration dialog with a link back to login.
#[component]
pub fn RegisterDialog(gate: StoredValue<SessionGate, LocalStorage>, open: RwSignal<Option<DialogKind>>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = Profile {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            phone: phone.get_untracked(),
        };
        gate.with_value(|g| g.submit_register(profile));
    };

    view! {
        <div
            id="register-modal"
            class="modal"
            class:active=move || open.get() == Some(DialogKind::Register)
            on:click=move |_| gate.with_value(|g| g.dialogs().on_click(DialogClickTarget::Backdrop))
        >
            <div
                class="modal-content"
                on:click=move |ev| {
                    ev.stop_propagation();
                    gate.with_value(|g| g.dialogs().on_click(DialogClickTarget::Content));
                }
            >
                <button
                    class="modal-close"
                    title="Close"
                    on:click=move |_| gate.with_value(|g| g.dialogs().close_all())
                >
                    "✕"
                </button>
                <h2>"Create an account"</h2>
                <form on:submit=on_submit>
                    <input
                        id="register-name"
                        type="text"
                        placeholder="Full name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        id="register-email"
                        type="email"
                        placeholder="you@example.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="register-password"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        id="register-phone"
                        type="tel"
                        placeholder="Phone"
                        required=true
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary">"Register"</button>
                </form>
                <p class="modal-switch">
                    "Already registered? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        gate.with_value(|g| g.dialogs().switch_to(DialogKind::Login));
                    }>
                        "Log in"
                    </a>
                </p>
            </div>
        </div>
    }
}
