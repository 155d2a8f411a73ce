//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the booking gate surfaces while
//! reading/writing shared state from Leptos context providers or props.

pub mod auth_dialogs;
pub mod booking_calendar;
pub mod login_overlay;
pub mod palette_switcher;
pub mod side_nav;
pub mod toast;
