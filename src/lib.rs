//! # site
//!
//! Leptos + WASM interaction layer for the booking website: palette and theme
//! switching, the side navigation menu, login/registration dialogs, toast
//! notifications, and the booking page that gates an embedded calendar behind
//! a simulated login.
//!
//! There is no backend. "Signing in" writes a session record to
//! `localStorage`, and its presence is the only authentication signal.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
