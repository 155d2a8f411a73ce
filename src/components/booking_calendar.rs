//! Embedded booking calendar with its loading placeholder.

use leptos::prelude::*;

use crate::config::CALENDAR_URL;

#[component]
pub fn BookingCalendar(loading: RwSignal<bool>, content: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="calendar-container">
            <div
                id="loading-calendar"
                class="loading-calendar"
                style:display=move || if loading.get() { "flex" } else { "none" }
            >
                <div class="spinner"></div>
                <p>"Loading calendar..."</p>
            </div>
            <iframe
                id="google-calendar"
                src=CALENDAR_URL
                title="Booking calendar"
                style:display=move || if content.get() { "block" } else { "none" }
            ></iframe>
        </div>
    }
}
