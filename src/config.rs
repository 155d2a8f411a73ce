//! Fixed site configuration: storage keys, endpoints, and UI timings.
//!
//! DESIGN
//! ======
//! Everything here is compile-time configuration. Timings are grouped into
//! small `Copy` structs so controllers take them by value and tests can shrink
//! or reorder delays without touching the controllers.

use std::time::Duration;

/// `localStorage` key holding the session record.
pub const SESSION_KEY: &str = "userSession";

/// `localStorage` key holding the preferred color palette.
pub const PALETTE_KEY: &str = "preferred-palette";

/// `localStorage` key holding the preferred light/dark theme.
pub const THEME_KEY: &str = "preferred-theme";

/// Embedded booking calendar. Not configurable at runtime.
pub const CALENDAR_URL: &str = "https://calendar.app.google/6f2ZD78CHcpnDkCd9";

/// Delays used by the session gate and dialog controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateTimings {
    /// Simulated network latency for login/register submissions.
    pub submit_latency: Duration,
    /// Delay between hiding the overlay and revealing the calendar.
    pub reveal_delay: Duration,
    /// Delay between closing one dialog and opening the next.
    pub dialog_switch_delay: Duration,
}

impl Default for GateTimings {
    fn default() -> Self {
        Self {
            submit_latency: Duration::from_millis(800),
            reveal_delay: Duration::from_millis(1500),
            dialog_switch_delay: Duration::from_millis(300),
        }
    }
}

/// Toast lifecycle timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    pub enter: Duration,
    pub visible: Duration,
    pub exit: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(10),
            visible: Duration::from_millis(2500),
            exit: Duration::from_millis(400),
        }
    }
}
