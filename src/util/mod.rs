//! Browser-facing ports and helpers shared across the UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! document attributes) from controller logic so the controllers stay
//! testable natively.

pub mod runtime;
pub mod storage;
pub mod theme;
pub mod view;
