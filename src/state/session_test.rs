use std::cell::RefCell;

use super::*;
use crate::state::dialog::DialogKind;
use crate::util::runtime::ManualRuntime;
use crate::util::storage::{BrowserStorage, MemoryStorage, load_json};

#[derive(Default)]
struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

struct Page {
    overlay: Rc<RefCell<bool>>,
    loading: Rc<RefCell<bool>>,
    content: Rc<RefCell<bool>>,
}

impl Page {
    fn new() -> Self {
        Self {
            overlay: Rc::new(RefCell::new(false)),
            loading: Rc::new(RefCell::new(true)),
            content: Rc::new(RefCell::new(false)),
        }
    }

    fn view(&self) -> GateView {
        GateView {
            overlay: Some(self.overlay.clone()),
            loading: Some(self.loading.clone()),
            content: Some(self.content.clone()),
        }
    }

    fn overlay(&self) -> bool {
        *self.overlay.borrow()
    }

    fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    fn content(&self) -> bool {
        *self.content.borrow()
    }
}

struct Harness {
    gate: SessionGate,
    store: MemoryStorage,
    page: Page,
    notes: Rc<RecordingNotifier>,
    rt: Rc<ManualRuntime>,
}

impl Harness {
    fn new() -> Self {
        Self::with_store(MemoryStorage::new())
    }

    fn with_store(store: MemoryStorage) -> Self {
        let page = Page::new();
        let view = page.view();
        Self::build(store, page, view)
    }

    fn build(store: MemoryStorage, page: Page, view: GateView) -> Self {
        let rt = ManualRuntime::new();
        let notes = Rc::new(RecordingNotifier::default());
        let slot: Rc<RefCell<Option<DialogKind>>> = Rc::new(RefCell::new(None));
        let timings = GateTimings::default();
        let dialogs = DialogController::new(slot, rt.clone(), timings.dialog_switch_delay);
        let gate = SessionGate::new(Rc::new(store.clone()), view, notes.clone(), dialogs, rt.clone(), timings);
        Self { gate, store, page, notes, rt }
    }

    fn record(&self) -> Option<SessionRecord> {
        load_json(&self.store, SESSION_KEY)
    }

    fn messages(&self) -> Vec<String> {
        self.notes.messages.borrow().clone()
    }
}

fn credentials(email: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: "hunter2".to_owned() }
}

fn profile() -> Profile {
    Profile {
        name: "Giulia".to_owned(),
        email: "giulia@example.com".to_owned(),
        password: "secret".to_owned(),
        phone: "+39 333 1234567".to_owned(),
    }
}

fn is_rfc3339(raw: &str) -> bool {
    time::OffsetDateTime::parse(raw, &time::format_description::well_known::Rfc3339).is_ok()
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_record_is_logged_out() {
    let h = Harness::new();
    h.gate.initialize();
    assert!(!h.gate.is_logged_in());
    assert!(h.page.overlay());
    assert!(h.page.loading());
    assert!(!h.page.content());
}

#[test]
fn initialize_with_record_is_logged_in_and_reveals_calendar() {
    let store = MemoryStorage::new();
    store.set(SESSION_KEY, r#"{"email":"a@b.com","loginTime":"2026-01-01T00:00:00Z"}"#).unwrap();
    let h = Harness::with_store(store);
    *h.page.overlay.borrow_mut() = true;

    h.gate.initialize();
    assert!(h.gate.is_logged_in());
    assert!(!h.page.overlay());
    assert!(!h.page.content());

    h.rt.advance_ms(1500);
    assert!(!h.page.loading());
    assert!(h.page.content());
}

#[test]
fn initialize_counts_presence_not_content() {
    let store = MemoryStorage::new();
    store.set(SESSION_KEY, "not even json").unwrap();
    let h = Harness::with_store(store);
    h.gate.initialize();
    assert!(h.gate.is_logged_in());
}

#[test]
fn initialize_does_not_notify() {
    let h = Harness::new();
    h.gate.initialize();
    h.rt.advance_ms(5000);
    assert!(h.messages().is_empty());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_completes_after_submit_latency() {
    let h = Harness::new();
    h.gate.initialize();
    h.gate.dialogs().open(DialogKind::Login);

    h.gate.submit_login(credentials("a@b.com"));
    h.rt.advance_ms(799);
    assert!(!h.gate.is_logged_in());
    assert!(h.record().is_none());

    h.rt.advance_ms(1);
    assert!(h.gate.is_logged_in());
    assert_eq!(h.record().unwrap().email, "a@b.com");
    assert_eq!(h.gate.dialogs().current(), None);
    assert_eq!(h.messages(), vec![LOGIN_MESSAGE.to_owned()]);
}

#[test]
fn login_record_omits_password_and_profile_fields() {
    let h = Harness::new();
    h.gate.submit_login(credentials("a@b.com"));
    h.rt.advance_ms(800);

    let raw = h.store.get(SESSION_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj["email"], "a@b.com");
    assert!(is_rfc3339(obj["loginTime"].as_str().unwrap()));
    assert!(!raw.contains("hunter2"));
}

#[test]
fn awaited_login_resolves_once_state_is_written() {
    let h = Harness::new();
    let done = Rc::new(Cell::new(false));
    let gate = h.gate.clone();
    let done_task = done.clone();
    h.rt.spawn(
        async move {
            gate.login(credentials("x@y.z")).await;
            done_task.set(true);
        }
        .boxed_local(),
    );
    h.rt.advance_ms(800);
    assert!(done.get());
    assert!(h.gate.is_logged_in());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_persists_full_profile_and_welcomes_by_name() {
    let h = Harness::new();
    h.gate.initialize();
    h.gate.dialogs().open(DialogKind::Register);
    let p = profile();

    h.gate.submit_register(p.clone());
    h.rt.advance_ms(800);

    let record = h.record().unwrap();
    assert_eq!(record.name.as_deref(), Some(p.name.as_str()));
    assert_eq!(record.email, p.email);
    assert_eq!(record.phone.as_deref(), Some(p.phone.as_str()));
    assert!(record.login_time.is_none());
    assert!(is_rfc3339(record.register_time.as_deref().unwrap()));

    assert!(h.gate.is_logged_in());
    assert_eq!(h.gate.dialogs().current(), None);
    let messages = h.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Giulia"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_record_and_shows_overlay() {
    let h = Harness::new();
    h.gate.initialize();
    h.gate.submit_login(credentials("a@b.com"));
    h.rt.advance_ms(800 + 1500);
    assert!(!h.page.overlay());

    h.gate.logout();
    assert!(h.store.get(SESSION_KEY).is_none());
    assert!(!h.gate.is_logged_in());
    assert!(h.page.overlay());
    assert_eq!(h.messages().last().map(String::as_str), Some(LOGOUT_MESSAGE));
}

#[test]
fn logout_without_session_is_harmless() {
    let h = Harness::new();
    h.gate.logout();
    assert!(!h.gate.is_logged_in());
    assert!(h.page.overlay());
}

// =============================================================
// Known limitations, kept as observable behavior
// =============================================================

#[test]
fn concurrent_logins_both_complete() {
    let h = Harness::new();
    h.gate.submit_login(credentials("first@example.com"));
    h.gate.submit_login(credentials("second@example.com"));
    h.rt.advance_ms(800);

    assert!(h.gate.is_logged_in());
    assert_eq!(h.messages(), vec![LOGIN_MESSAGE.to_owned(), LOGIN_MESSAGE.to_owned()]);
    // Later completion wins the single storage key.
    assert_eq!(h.record().unwrap().email, "second@example.com");
}

#[test]
fn logout_during_reveal_window_still_reveals_calendar() {
    let h = Harness::new();
    h.gate.initialize();
    h.gate.submit_login(credentials("a@b.com"));
    h.rt.advance_ms(800);
    assert!(!h.page.content());

    h.rt.advance_ms(200);
    h.gate.logout();
    assert!(!h.gate.is_logged_in());

    h.rt.advance_ms(1300);
    assert!(h.page.content());
    assert!(!h.page.loading());
    assert!(h.page.overlay());
}

// =============================================================
// Missing collaborators
// =============================================================

#[test]
fn missing_elements_are_skipped() {
    let h = Harness::build(MemoryStorage::new(), Page::new(), GateView::default());
    h.gate.initialize();
    h.gate.submit_login(credentials("a@b.com"));
    h.rt.advance_ms(5000);
    assert!(h.gate.is_logged_in());
    h.gate.logout();
    assert!(!h.gate.is_logged_in());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unavailable_storage_still_signs_in() {
    let rt = ManualRuntime::new();
    let notes = Rc::new(RecordingNotifier::default());
    let slot: Rc<RefCell<Option<DialogKind>>> = Rc::new(RefCell::new(None));
    let timings = GateTimings::default();
    let dialogs = DialogController::new(slot, rt.clone(), timings.dialog_switch_delay);
    let gate = SessionGate::new(Rc::new(BrowserStorage), GateView::default(), notes.clone(), dialogs, rt.clone(), timings);

    gate.initialize();
    assert!(!gate.is_logged_in());
    gate.submit_login(credentials("a@b.com"));
    rt.advance_ms(800);
    assert!(gate.is_logged_in());
    gate.logout();
    assert!(!gate.is_logged_in());
    assert_eq!(notes.messages.borrow().len(), 2);
}

// =============================================================
// End-to-end booking scenario
// =============================================================

#[test]
fn booking_scenario_from_signed_out_to_calendar() {
    let h = Harness::new();
    h.gate.initialize();
    assert!(h.page.overlay());
    assert!(!h.page.content());

    h.gate.submit_login(Credentials { email: "a@b.com".to_owned(), password: String::new() });
    h.rt.advance_ms(800);
    assert!(!h.page.overlay());
    assert!(!h.page.content());

    h.rt.advance_ms(1500);
    assert!(h.page.content());
    assert!(!h.page.loading());

    let record = h.record().unwrap();
    assert_eq!(record.email, "a@b.com");
    assert!(is_rfc3339(record.login_time.as_deref().unwrap()));
}
