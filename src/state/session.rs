//! Session gate for the booking page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The booking calendar is hidden behind a login prompt. There is no backend:
//! a "login" waits a fixed latency and then writes a session record to local
//! storage. The presence of that record, never its content, is what counts as
//! being signed in.
//!
//! DESIGN
//! ======
//! `SessionGate` owns the signed-in flag and reconciles it onto the page's
//! overlay, loading indicator and calendar frame. Collaborators are injected
//! (`KeyValueStore`, `GateView`, `Notifier`, `DialogController`, `Runtime`)
//! so the same controller drives Leptos signals in the browser and plain
//! cells in tests.
//!
//! KNOWN LIMITATIONS
//! =================
//! - Submissions are not deduplicated. Two logins in flight both complete and
//!   both write a record.
//! - The staged reveal does not re-check the flag when its delay elapses, so
//!   logging out inside the reveal window still shows the calendar.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::config::{GateTimings, SESSION_KEY};
use crate::state::dialog::DialogController;
use crate::state::toast::Notifier;
use crate::util::runtime::Runtime;
use crate::util::storage::{KeyValueStore, save_json};
use crate::util::view::{GateView, set_visible};

/// Record persisted after a simulated login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_time: Option<String>,
}

/// Login form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    /// Collected by the form but never stored.
    pub password: String,
}

/// Registration form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// Collected by the form but never stored.
    pub password: String,
    pub phone: String,
}

impl SessionRecord {
    pub fn from_login(credentials: &Credentials, at: String) -> Self {
        Self {
            email: credentials.email.clone(),
            name: None,
            phone: None,
            login_time: Some(at),
            register_time: None,
        }
    }

    pub fn from_registration(profile: &Profile, at: String) -> Self {
        Self {
            email: profile.email.clone(),
            name: Some(profile.name.clone()),
            phone: Some(profile.phone.clone()),
            login_time: None,
            register_time: Some(at),
        }
    }
}

pub const LOGIN_MESSAGE: &str = "✅ Login successful!";
pub const LOGOUT_MESSAGE: &str = "👋 Logged out";

pub fn welcome_message(name: &str) -> String {
    format!("✅ Registration complete! Welcome {name}!")
}

/// Controller owning the signed-in flag. Clones share the same state.
#[derive(Clone)]
pub struct SessionGate {
    logged_in: Rc<Cell<bool>>,
    store: Rc<dyn KeyValueStore>,
    view: GateView,
    notifier: Rc<dyn Notifier>,
    dialogs: DialogController,
    runtime: Rc<dyn Runtime>,
    timings: GateTimings,
}

impl SessionGate {
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        view: GateView,
        notifier: Rc<dyn Notifier>,
        dialogs: DialogController,
        runtime: Rc<dyn Runtime>,
        timings: GateTimings,
    ) -> Self {
        Self {
            logged_in: Rc::new(Cell::new(false)),
            store,
            view,
            notifier,
            dialogs,
            runtime,
            timings,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    pub fn dialogs(&self) -> &DialogController {
        &self.dialogs
    }

    /// Derive the flag from the stored record and sync the page to it.
    pub fn initialize(&self) {
        let present = self.store.get(SESSION_KEY).is_some();
        self.logged_in.set(present);
        if present {
            leptos::logging::log!("session: restored stored session");
        }
        self.reconcile_view();
    }

    /// Simulated login. Always succeeds after the submit latency.
    pub async fn login(&self, credentials: Credentials) {
        self.runtime.sleep(self.timings.submit_latency).await;
        let record = SessionRecord::from_login(&credentials, self.runtime.timestamp());
        self.complete_sign_in(&record);
        self.notifier.notify(LOGIN_MESSAGE);
    }

    /// Simulated registration. Always succeeds after the submit latency.
    pub async fn register(&self, profile: Profile) {
        self.runtime.sleep(self.timings.submit_latency).await;
        let record = SessionRecord::from_registration(&profile, self.runtime.timestamp());
        self.complete_sign_in(&record);
        self.notifier.notify(&welcome_message(&profile.name));
    }

    /// Fire-and-forget `login`, as a form submit handler uses it.
    pub fn submit_login(&self, credentials: Credentials) {
        let this = self.clone();
        self.runtime.spawn(async move { this.login(credentials).await }.boxed_local());
    }

    /// Fire-and-forget `register`, as a form submit handler uses it.
    pub fn submit_register(&self, profile: Profile) {
        let this = self.clone();
        self.runtime.spawn(async move { this.register(profile).await }.boxed_local());
    }

    pub fn logout(&self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            leptos::logging::warn!("session: failed to clear stored session: {e}");
        }
        self.logged_in.set(false);
        self.reconcile_view();
        self.notifier.notify(LOGOUT_MESSAGE);
    }

    /// Sync overlay, loading indicator and calendar frame to the flag.
    pub fn reconcile_view(&self) {
        if !self.logged_in.get() {
            set_visible(self.view.overlay.as_ref(), true);
            return;
        }

        set_visible(self.view.overlay.as_ref(), false);
        let loading = self.view.loading.clone();
        let content = self.view.content.clone();
        let reveal = self.runtime.sleep(self.timings.reveal_delay);
        self.runtime.spawn(
            async move {
                reveal.await;
                set_visible(loading.as_ref(), false);
                set_visible(content.as_ref(), true);
            }
            .boxed_local(),
        );
    }

    fn complete_sign_in(&self, record: &SessionRecord) {
        if let Err(e) = save_json(self.store.as_ref(), SESSION_KEY, record) {
            leptos::logging::warn!("session: failed to persist session: {e}");
        }
        self.logged_in.set(true);
        self.dialogs.close_all();
        self.reconcile_view();
    }
}
