//! Client-side state and the controllers that drive it.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `dialog`, `toast`, `prefs`, `nav`)
//! so each controller can be exercised on its own with in-memory slots.

pub mod dialog;
pub mod nav;
pub mod prefs;
pub mod session;
pub mod toast;
