//! Deferred execution port: timers, detached tasks, and wall-clock stamps.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never call `setTimeout`-style APIs directly. They receive an
//! `Rc<dyn Runtime>` so the same code runs on the browser event loop
//! (`BrowserRuntime`) and under a virtual clock in tests (`ManualRuntime`).
//!
//! TRADE-OFFS
//! ==========
//! Spawned tasks are fire-and-forget and cannot be cancelled. Natively,
//! `BrowserRuntime` drops spawned tasks and its sleeps never finish, because
//! server rendering never drives user interactions.

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

/// Single-threaded scheduling primitives used by the UI controllers.
pub trait Runtime {
    /// Future resolving once `delay` has elapsed.
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()>;

    /// Run `task` to completion on a later turn of the event loop.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Current time as an ISO-8601 UTC string.
    fn timestamp(&self) -> String;
}

/// Runtime backed by the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(delay).boxed_local()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay;
            futures::future::pending().boxed_local()
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(task);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(task);
        }
    }

    fn timestamp(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::new_0().to_iso_string().into()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            format_rfc3339(time::OffsetDateTime::now_utc())
        }
    }
}

/// RFC 3339 stamp of `at`, normalized to UTC.
///
/// RFC 3339 cannot carry sub-minute offsets, so the instant is moved to UTC
/// first. The only remaining failure is a year outside `0..=9999`, which is
/// logged and yields an empty stamp.
#[cfg_attr(all(feature = "hydrate", not(test)), allow(dead_code))]
pub(crate) fn format_rfc3339(at: time::OffsetDateTime) -> String {
    match at.to_offset(time::UtcOffset::UTC).format(&time::format_description::well_known::Rfc3339) {
        Ok(stamp) => stamp,
        Err(e) => {
            leptos::logging::warn!("runtime: timestamp not formatted: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualRuntime;
